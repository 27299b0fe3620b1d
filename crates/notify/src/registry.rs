// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notifier factory registry.
//!
//! Channels are added by registering a constructor; looking up an
//! unregistered channel is a typed error carrying the channels that do
//! exist. Adding a channel never means editing dispatch code.

use crate::channel::ChannelKind;
use crate::config::NotifyConfig;
use crate::console::ConsoleNotifier;
use crate::email::EmailNotifier;
use crate::error::NotifyError;
use crate::notifier::Notifier;
use crate::push::PushNotifier;
use crate::slack::SlackNotifier;
use crate::sms::SmsNotifier;
use std::collections::BTreeMap;
use tracing::debug;

/// A constructor producing a boxed notifier.
type NotifierCtor = Box<dyn Fn() -> Box<dyn Notifier>>;

/// Mapping from channel to notifier constructor.
#[derive(Default)]
pub struct NotifierRegistry {
    ctors: BTreeMap<ChannelKind, NotifierCtor>,
}

impl NotifierRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ctors: BTreeMap::new(),
        }
    }

    /// Creates a registry with the five built-in notifiers registered.
    ///
    /// # Arguments
    ///
    /// * `config` - The channel configuration handed to the notifiers
    #[must_use]
    pub fn with_defaults(config: &NotifyConfig) -> Self {
        let mut registry: Self = Self::new();

        registry.register(ChannelKind::Console, || Box::new(ConsoleNotifier));

        let email_config = config.email.clone();
        registry.register(ChannelKind::Email, move || {
            Box::new(EmailNotifier::new(email_config.clone()))
        });

        let sms_config = config.sms.clone();
        registry.register(ChannelKind::Sms, move || {
            Box::new(SmsNotifier::new(sms_config.clone()))
        });

        let push_config = config.push.clone();
        registry.register(ChannelKind::Push, move || {
            Box::new(PushNotifier::new(push_config.clone()))
        });

        let slack_config = config.slack.clone();
        registry.register(ChannelKind::Slack, move || {
            Box::new(SlackNotifier::new(slack_config.clone()))
        });

        registry
    }

    /// Registers a constructor for a channel.
    ///
    /// Registering a channel twice replaces the earlier constructor.
    ///
    /// # Arguments
    ///
    /// * `kind` - The channel to register
    /// * `ctor` - The constructor producing the channel's notifier
    pub fn register<F>(&mut self, kind: ChannelKind, ctor: F)
    where
        F: Fn() -> Box<dyn Notifier> + 'static,
    {
        debug!(channel = %kind, "registered notifier");
        self.ctors.insert(kind, Box::new(ctor));
    }

    /// Creates a notifier for a channel.
    ///
    /// # Arguments
    ///
    /// * `kind` - The channel to create a notifier for
    ///
    /// # Returns
    ///
    /// The constructed notifier.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::UnknownChannel` (carrying the registered
    /// channels) if nothing is registered for `kind`.
    pub fn create(&self, kind: ChannelKind) -> Result<Box<dyn Notifier>, NotifyError> {
        self.ctors.get(&kind).map_or_else(
            || {
                Err(NotifyError::UnknownChannel {
                    channel: kind.as_str().to_string(),
                    available: self.available_channels(),
                })
            },
            |ctor| Ok(ctor()),
        )
    }

    /// Returns the registered channel tags, sorted.
    #[must_use]
    pub fn available_channels(&self) -> Vec<String> {
        self.ctors
            .keys()
            .map(|kind| kind.as_str().to_string())
            .collect()
    }

    /// Returns true if a constructor is registered for the channel.
    #[must_use]
    pub fn is_registered(&self, kind: ChannelKind) -> bool {
        self.ctors.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::Priority;

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registry: NotifierRegistry = NotifierRegistry::new();

        assert!(registry.available_channels().is_empty());
        assert!(!registry.is_registered(ChannelKind::Console));
    }

    #[test]
    fn test_with_defaults_registers_all_builtin_channels() {
        let registry: NotifierRegistry = NotifierRegistry::with_defaults(&NotifyConfig::default());

        assert_eq!(
            registry.available_channels(),
            vec!["console", "email", "sms", "push", "slack"]
        );
    }

    #[test]
    fn test_create_returns_the_matching_notifier() {
        let registry: NotifierRegistry = NotifierRegistry::with_defaults(&NotifyConfig::default());

        let notifier = registry.create(ChannelKind::Email).unwrap();
        assert_eq!(notifier.channel(), ChannelKind::Email);
    }

    #[test]
    fn test_unknown_channel_error_lists_available_channels() {
        let mut registry: NotifierRegistry = NotifierRegistry::new();
        registry.register(ChannelKind::Console, || Box::new(ConsoleNotifier));

        let err: NotifyError = match registry.create(ChannelKind::Sms) {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };

        match err {
            NotifyError::UnknownChannel { channel, available } => {
                assert_eq!(channel, "sms");
                assert_eq!(available, vec!["console"]);
            }
            other => panic!("expected UnknownChannel, got {other}"),
        }
    }

    #[test]
    fn test_registering_twice_replaces_the_constructor() {
        let mut registry: NotifierRegistry = NotifierRegistry::new();
        registry.register(ChannelKind::Console, || Box::new(ConsoleNotifier));
        registry.register(ChannelKind::Console, || Box::new(ConsoleNotifier));

        assert_eq!(registry.available_channels(), vec!["console"]);
    }

    #[test]
    fn test_created_notifier_is_usable() {
        let registry: NotifierRegistry = NotifierRegistry::with_defaults(&NotifyConfig::default());

        let notifier = registry.create(ChannelKind::Console).unwrap();
        assert!(notifier.send("dev@techflow.example", "Hello", Priority::Normal));
    }
}
