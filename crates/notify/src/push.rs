// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::channel::ChannelKind;
use crate::config::PushConfig;
use crate::notifier::{Notifier, Priority};
use serde_json::{Value, json};
use tracing::{info, warn};

/// Simulated mobile push notifier.
#[derive(Debug, Clone)]
pub struct PushNotifier {
    config: PushConfig,
}

impl PushNotifier {
    /// Creates a new `PushNotifier` with the given provider settings.
    ///
    /// # Arguments
    ///
    /// * `config` - The provider settings to use
    #[must_use]
    pub const fn new(config: PushConfig) -> Self {
        Self { config }
    }
}

/// Builds the provider payload for one push notification.
fn build_payload(recipient: &str, message: &str, priority: Priority) -> Value {
    let mut payload: Value = json!({
        "to": recipient,
        "title": "TechFlow notification",
        "body": message,
        "priority": priority.as_str(),
    });

    if priority == Priority::Urgent {
        payload["sound"] = Value::from("alarm");
        payload["badge"] = Value::from(1);
    }

    payload
}

impl Notifier for PushNotifier {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Push
    }

    fn send(&self, recipient: &str, message: &str, priority: Priority) -> bool {
        if let Err(e) = self.validate(recipient, message) {
            warn!(channel = %self.channel(), error = %e, "notification rejected");
            return false;
        }

        let payload: Value = build_payload(recipient, message, priority);
        info!(
            api_url = %self.config.api_url,
            payload = %payload,
            "push notification sent (simulated)"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notifier() -> PushNotifier {
        PushNotifier::new(PushConfig::default())
    }

    #[test]
    fn test_push_channel_name() {
        assert_eq!(make_notifier().channel(), ChannelKind::Push);
    }

    #[test]
    fn test_payload_carries_recipient_and_body() {
        let payload: Value = build_payload("device_token_abc123", "New request", Priority::Normal);

        assert_eq!(payload["to"], "device_token_abc123");
        assert_eq!(payload["body"], "New request");
        assert_eq!(payload["priority"], "normal");
        assert!(payload.get("sound").is_none());
        assert!(payload.get("badge").is_none());
    }

    #[test]
    fn test_urgent_payload_adds_sound_and_badge() {
        let payload: Value = build_payload("device_token_abc123", "Wake up", Priority::Urgent);

        assert_eq!(payload["sound"], "alarm");
        assert_eq!(payload["badge"], 1);
        assert_eq!(payload["priority"], "urgent");
    }

    #[test]
    fn test_push_send_fails_on_empty_input() {
        assert!(!make_notifier().send("", "Hello", Priority::Normal));
        assert!(!make_notifier().send("device_token_abc123", "", Priority::Normal));
    }

    #[test]
    fn test_push_send_succeeds_with_valid_input() {
        assert!(make_notifier().send("device_token_abc123", "Hello", Priority::High));
    }
}
