// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for notification dispatch.

use thiserror::Error;

/// Maximum message length the dispatch service accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Notification dispatch errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The requested channel has no registered notifier.
    #[error("Channel '{channel}' is not registered. Available channels: {}", .available.join(", "))]
    UnknownChannel {
        /// The channel that was requested.
        channel: String,
        /// The channels currently registered, sorted.
        available: Vec<String>,
    },

    /// A channel tag did not match any known channel.
    #[error("Unknown channel tag: '{0}'")]
    InvalidChannelTag(String),

    /// A priority tag did not match any known priority.
    #[error("Unknown priority tag: '{0}'")]
    InvalidPriorityTag(String),

    /// The recipient is empty.
    #[error("Recipient is empty")]
    EmptyRecipient,

    /// The message is empty.
    #[error("Message is empty")]
    EmptyMessage,

    /// The message exceeds the dispatch length cap.
    #[error("Message is too long: {length} characters (max {max})")]
    MessageTooLong {
        /// The offending message length.
        length: usize,
        /// The cap that was exceeded.
        max: usize,
    },

    /// The recipient is not a plausible email address.
    #[error("Invalid email address: '{recipient}'")]
    InvalidEmailAddress {
        /// The offending recipient.
        recipient: String,
    },
}
