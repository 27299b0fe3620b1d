// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification dispatch service.
//!
//! Thin layer over the registry: shared validation, per-channel fan-out,
//! and counters. No retries and no queueing; a failed send is just a
//! `false` and a counter bump.

use crate::channel::ChannelKind;
use crate::config::NotifyConfig;
use crate::error::{MAX_MESSAGE_CHARS, NotifyError};
use crate::notifier::Priority;
use crate::registry::NotifierRegistry;
use std::collections::BTreeMap;
use tracing::warn;

/// Counters for dispatched notifications.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchStats {
    sent: u64,
    failed: u64,
    per_channel: BTreeMap<ChannelKind, u64>,
}

impl DispatchStats {
    /// Total successful sends.
    #[must_use]
    pub const fn sent(&self) -> u64 {
        self.sent
    }

    /// Total failed sends (validation failures and unknown channels).
    #[must_use]
    pub const fn failed(&self) -> u64 {
        self.failed
    }

    /// Successful sends on one channel.
    #[must_use]
    pub fn sent_on(&self, kind: ChannelKind) -> u64 {
        self.per_channel.get(&kind).copied().unwrap_or(0)
    }

    fn record_sent(&mut self, kind: ChannelKind) {
        self.sent += 1;
        *self.per_channel.entry(kind).or_insert(0) += 1;
    }

    fn record_failure(&mut self) {
        self.failed += 1;
    }

    fn reset(&mut self) {
        self.sent = 0;
        self.failed = 0;
        self.per_channel.clear();
    }
}

/// Outcome of a bulk send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Recipients reached.
    pub success: usize,
    /// Recipients not reached.
    pub failed: usize,
}

/// Dispatches notifications through registered channels.
pub struct NotificationService {
    registry: NotifierRegistry,
    stats: DispatchStats,
}

impl NotificationService {
    /// Creates a service over an existing registry.
    ///
    /// # Arguments
    ///
    /// * `registry` - The registry to create notifiers from
    #[must_use]
    pub const fn new(registry: NotifierRegistry) -> Self {
        Self {
            registry,
            stats: DispatchStats {
                sent: 0,
                failed: 0,
                per_channel: BTreeMap::new(),
            },
        }
    }

    /// Creates a service with the built-in notifiers registered.
    ///
    /// # Arguments
    ///
    /// * `config` - The channel configuration handed to the notifiers
    #[must_use]
    pub fn with_defaults(config: &NotifyConfig) -> Self {
        Self::new(NotifierRegistry::with_defaults(config))
    }

    /// Returns the underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &NotifierRegistry {
        &self.registry
    }

    /// Returns the dispatch counters.
    #[must_use]
    pub const fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    /// Resets the dispatch counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Validation every channel shares, applied before a notifier is
    /// even constructed.
    fn validate_common(recipient: &str, message: &str) -> Result<(), NotifyError> {
        if recipient.trim().is_empty() {
            return Err(NotifyError::EmptyRecipient);
        }
        if message.trim().is_empty() {
            return Err(NotifyError::EmptyMessage);
        }
        let length: usize = message.chars().count();
        if length > MAX_MESSAGE_CHARS {
            return Err(NotifyError::MessageTooLong {
                length,
                max: MAX_MESSAGE_CHARS,
            });
        }
        Ok(())
    }

    /// Sends one notification on one channel.
    ///
    /// Returns `true` on success; validation failures and unknown
    /// channels are logged, counted, and reported as `false`.
    ///
    /// # Arguments
    ///
    /// * `recipient` - The recipient address, number, token, or handle
    /// * `message` - The message text
    /// * `kind` - The channel to send on
    /// * `priority` - The message priority
    pub fn send(
        &mut self,
        recipient: &str,
        message: &str,
        kind: ChannelKind,
        priority: Priority,
    ) -> bool {
        if let Err(e) = Self::validate_common(recipient, message) {
            warn!(channel = %kind, error = %e, "notification rejected");
            self.stats.record_failure();
            return false;
        }

        match self.registry.create(kind) {
            Ok(notifier) => {
                let delivered: bool = notifier.send(recipient, message, priority);
                if delivered {
                    self.stats.record_sent(kind);
                } else {
                    self.stats.record_failure();
                }
                delivered
            }
            Err(e) => {
                warn!(channel = %kind, error = %e, "notification rejected");
                self.stats.record_failure();
                false
            }
        }
    }

    /// Sends the same message to many recipients on one channel.
    ///
    /// # Arguments
    ///
    /// * `recipients` - The recipient list
    /// * `message` - The message text
    /// * `kind` - The channel to send on
    /// * `priority` - The message priority
    pub fn send_bulk(
        &mut self,
        recipients: &[String],
        message: &str,
        kind: ChannelKind,
        priority: Priority,
    ) -> BulkOutcome {
        let mut outcome: BulkOutcome = BulkOutcome {
            success: 0,
            failed: 0,
        };

        for recipient in recipients {
            if self.send(recipient, message, kind, priority) {
                outcome.success += 1;
            } else {
                outcome.failed += 1;
            }
        }

        outcome
    }

    /// Sends the same message to one recipient on several channels.
    ///
    /// Results are returned per channel, in the order given.
    ///
    /// # Arguments
    ///
    /// * `recipient` - The recipient address, number, token, or handle
    /// * `message` - The message text
    /// * `kinds` - The channels to send on
    /// * `priority` - The message priority
    pub fn send_multi_channel(
        &mut self,
        recipient: &str,
        message: &str,
        kinds: &[ChannelKind],
        priority: Priority,
    ) -> Vec<(ChannelKind, bool)> {
        kinds
            .iter()
            .map(|kind| (*kind, self.send(recipient, message, *kind, priority)))
            .collect()
    }
}
