// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::channel::ChannelKind;
use crate::config::SlackConfig;
use crate::notifier::{Notifier, Priority};
use tracing::{info, warn};

/// Simulated Slack webhook notifier.
///
/// The recipient is a channel or user handle (e.g. "#hr-notifications").
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    config: SlackConfig,
}

impl SlackNotifier {
    /// Creates a new `SlackNotifier` with the given webhook settings.
    ///
    /// # Arguments
    ///
    /// * `config` - The webhook settings to use
    #[must_use]
    pub const fn new(config: SlackConfig) -> Self {
        Self { config }
    }
}

/// Applies Slack urgency markup to a message.
fn decorate(message: &str, priority: Priority) -> String {
    match priority {
        Priority::Urgent => format!("*URGENT* {message}"),
        Priority::High => format!("*Important* {message}"),
        Priority::Low | Priority::Normal => message.to_string(),
    }
}

impl Notifier for SlackNotifier {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Slack
    }

    fn send(&self, recipient: &str, message: &str, priority: Priority) -> bool {
        if let Err(e) = self.validate(recipient, message) {
            warn!(channel = %self.channel(), error = %e, "notification rejected");
            return false;
        }

        let text: String = decorate(message, priority);
        info!(
            webhook_url = %self.config.webhook_url,
            target = recipient,
            text = %text,
            "Slack message sent (simulated)"
        );
        true
    }
}
