// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::NotifyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A notification delivery medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Plain stdout output, used by demos and tests.
    Console,
    /// Simulated SMTP delivery.
    Email,
    /// Simulated SMS gateway delivery.
    Sms,
    /// Simulated mobile push delivery.
    Push,
    /// Simulated Slack webhook delivery.
    Slack,
}

impl ChannelKind {
    /// Returns the string tag for this channel.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
            Self::Slack => "slack",
        }
    }

    /// Parses a channel from its string tag.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::InvalidChannelTag` if the tag is not recognized.
    fn parse_str(s: &str) -> Result<Self, NotifyError> {
        match s {
            "console" => Ok(Self::Console),
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "push" => Ok(Self::Push),
            "slack" => Ok(Self::Slack),
            _ => Err(NotifyError::InvalidChannelTag(s.to_string())),
        }
    }
}

impl FromStr for ChannelKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
