// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::channel::ChannelKind;
use crate::config::EmailConfig;
use crate::error::NotifyError;
use crate::notifier::{Notifier, Priority};
use tracing::{info, warn};

/// How many characters of the message seed the derived subject line.
const SUBJECT_SNIPPET_CHARS: usize = 50;

/// Simulated SMTP notifier.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    config: EmailConfig,
}

impl EmailNotifier {
    /// Creates a new `EmailNotifier` with the given SMTP settings.
    ///
    /// # Arguments
    ///
    /// * `config` - The SMTP settings to use
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

/// Derives a subject line from the message and priority.
fn subject_for(message: &str, priority: Priority) -> String {
    let snippet: String = message.chars().take(SUBJECT_SNIPPET_CHARS).collect();
    match priority {
        Priority::Urgent => format!("URGENT: {snippet}"),
        Priority::High => format!("IMPORTANT: {snippet}"),
        Priority::Low => format!("NOTE: {snippet}"),
        Priority::Normal => snippet,
    }
}

impl Notifier for EmailNotifier {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Email
    }

    fn validate(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        if recipient.trim().is_empty() {
            return Err(NotifyError::EmptyRecipient);
        }
        if message.trim().is_empty() {
            return Err(NotifyError::EmptyMessage);
        }
        // Deliberately shallow address check; this is a simulation
        if !recipient.contains('@') || !recipient.contains('.') {
            return Err(NotifyError::InvalidEmailAddress {
                recipient: recipient.to_string(),
            });
        }
        Ok(())
    }

    fn send(&self, recipient: &str, message: &str, priority: Priority) -> bool {
        if let Err(e) = self.validate(recipient, message) {
            warn!(channel = %self.channel(), error = %e, "notification rejected");
            return false;
        }

        let subject: String = subject_for(message, priority);
        info!(
            host = %self.config.host,
            port = self.config.port,
            "connecting to SMTP server (simulated)"
        );
        info!(
            from = %self.config.sender,
            to = recipient,
            subject = %subject,
            priority = %priority,
            body_chars = message.chars().count(),
            "email sent (simulated)"
        );
        true
    }
}
