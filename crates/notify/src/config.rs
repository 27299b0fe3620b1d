// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Channel configuration.
//!
//! Configuration is built once and handed to the notifiers that need it;
//! nothing here is global. Defaults point at reserved example hosts since
//! every delivery is simulated anyway.

use serde::{Deserialize, Serialize};

/// SMTP settings for the email notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP host.
    pub host: String,
    /// SMTP port.
    pub port: u16,
    /// Sender address.
    pub sender: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            host: String::from("smtp.techflow.example"),
            port: 587,
            sender: String::from("notifications@techflow.example"),
        }
    }
}

/// Gateway settings for the SMS notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Gateway endpoint.
    pub api_url: String,
    /// Gateway API key. Never logged.
    pub api_key: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.sms-provider.example/send"),
            api_key: String::from("sk_live_placeholder"),
        }
    }
}

/// Provider settings for the push notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushConfig {
    /// Provider endpoint.
    pub api_url: String,
    /// Provider API key. Never logged.
    pub api_key: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.push-provider.example/notify"),
            api_key: String::from("pk_placeholder"),
        }
    }
}

/// Webhook settings for the Slack notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Incoming-webhook URL.
    pub webhook_url: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::from("https://hooks.slack.example/services/T000/B000/XXXX"),
        }
    }
}

/// Configuration for every notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NotifyConfig {
    /// Email channel settings.
    pub email: EmailConfig,
    /// SMS channel settings.
    pub sms: SmsConfig,
    /// Push channel settings.
    pub push: PushConfig,
    /// Slack channel settings.
    pub slack: SlackConfig,
}
