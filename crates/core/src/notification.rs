// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A notification emitted by a status transition, as data.
///
/// The state machine never talks to a delivery channel; it describes what
/// should be said and to whom, and the caller dispatches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundNotification {
    /// The message text.
    pub message: String,
    /// The recipient addresses.
    pub recipients: Vec<String>,
}

impl OutboundNotification {
    /// Creates a new `OutboundNotification`.
    ///
    /// # Arguments
    ///
    /// * `message` - The message text
    /// * `recipients` - The recipient addresses
    #[must_use]
    pub const fn new(message: String, recipients: Vec<String>) -> Self {
        Self {
            message,
            recipients,
        }
    }
}
