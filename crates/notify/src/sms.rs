// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::channel::ChannelKind;
use crate::config::SmsConfig;
use crate::notifier::{Notifier, Priority};
use tracing::{info, warn};

/// Hard length limit of a single SMS.
const SMS_MAX_CHARS: usize = 160;

/// Simulated SMS gateway notifier.
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    config: SmsConfig,
}

impl SmsNotifier {
    /// Creates a new `SmsNotifier` with the given gateway settings.
    ///
    /// # Arguments
    ///
    /// * `config` - The gateway settings to use
    #[must_use]
    pub const fn new(config: SmsConfig) -> Self {
        Self { config }
    }
}

/// Normalizes a national number to international form.
///
/// Numbers already starting with `+` are returned unchanged; anything
/// else is treated as a French national number.
fn normalize_number(recipient: &str) -> String {
    if recipient.starts_with('+') {
        recipient.to_string()
    } else {
        format!("+33{}", recipient.trim_start_matches('0'))
    }
}

/// Fits a message into a single SMS, truncating with an ellipsis marker.
fn fit_to_sms(message: &str) -> String {
    if message.chars().count() <= SMS_MAX_CHARS {
        message.to_string()
    } else {
        let truncated: String = message.chars().take(SMS_MAX_CHARS - 3).collect();
        format!("{truncated}...")
    }
}

impl Notifier for SmsNotifier {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Sms
    }

    fn send(&self, recipient: &str, message: &str, priority: Priority) -> bool {
        if let Err(e) = self.validate(recipient, message) {
            warn!(channel = %self.channel(), error = %e, "notification rejected");
            return false;
        }

        let number: String = normalize_number(recipient);
        let body: String = if priority == Priority::Urgent {
            fit_to_sms(&format!("URGENT: {message}"))
        } else {
            fit_to_sms(message)
        };

        info!(
            api_url = %self.config.api_url,
            to = %number,
            body = %body,
            "SMS sent (simulated)"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notifier() -> SmsNotifier {
        SmsNotifier::new(SmsConfig::default())
    }

    #[test]
    fn test_sms_channel_name() {
        assert_eq!(make_notifier().channel(), ChannelKind::Sms);
    }

    #[test]
    fn test_national_number_is_internationalized() {
        assert_eq!(normalize_number("0612345678"), "+33612345678");
    }

    #[test]
    fn test_international_number_is_untouched() {
        assert_eq!(normalize_number("+33612345678"), "+33612345678");
        assert_eq!(normalize_number("+14155550123"), "+14155550123");
    }

    #[test]
    fn test_short_message_is_untouched() {
        let message: &str = "Verification code: 847291";
        assert_eq!(fit_to_sms(message), message);
    }

    #[test]
    fn test_long_message_is_truncated_to_single_sms() {
        let message: String = "x".repeat(200);
        let fitted: String = fit_to_sms(&message);

        assert_eq!(fitted.chars().count(), SMS_MAX_CHARS);
        assert!(fitted.ends_with("..."));
    }

    #[test]
    fn test_message_at_limit_is_untouched() {
        let message: String = "x".repeat(SMS_MAX_CHARS);
        assert_eq!(fit_to_sms(&message), message);
    }

    #[test]
    fn test_sms_send_fails_on_empty_input() {
        assert!(!make_notifier().send("", "Hello", Priority::Normal));
        assert!(!make_notifier().send("0612345678", "", Priority::Normal));
    }

    #[test]
    fn test_sms_send_succeeds_with_valid_input() {
        assert!(make_notifier().send("0612345678", "Hello", Priority::Urgent));
    }
}
