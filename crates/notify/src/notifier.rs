// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::channel::ChannelKind;
use crate::error::NotifyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Message priority, reflected in channel-specific formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational; some channels mark it as a note.
    Low,
    /// The default.
    #[default]
    Normal,
    /// Marked as important.
    High,
    /// Marked as urgent; push delivery adds sound and badge.
    Urgent,
}

impl Priority {
    /// Returns the string tag for this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Parses a priority from its string tag.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::InvalidPriorityTag` if the tag is not recognized.
    fn parse_str(s: &str) -> Result<Self, NotifyError> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(NotifyError::InvalidPriorityTag(s.to_string())),
        }
    }
}

impl FromStr for Priority {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A delivery channel.
///
/// Every implementation simulates its side effect as console or log
/// output; nothing leaves the process. `send` reports success as a plain
/// boolean: `true` whenever the recipient and message pass the channel's
/// validation.
pub trait Notifier {
    /// Returns the channel this notifier delivers on.
    fn channel(&self) -> ChannelKind;

    /// Validates a recipient and message for this channel.
    ///
    /// The base rule is that both must be non-blank; channels may add
    /// their own checks on top.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first failed check.
    fn validate(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        if recipient.trim().is_empty() {
            return Err(NotifyError::EmptyRecipient);
        }
        if message.trim().is_empty() {
            return Err(NotifyError::EmptyMessage);
        }
        Ok(())
    }

    /// Sends a message, simulated.
    ///
    /// Returns `true` on success, `false` when validation fails.
    fn send(&self, recipient: &str, message: &str, priority: Priority) -> bool;
}
