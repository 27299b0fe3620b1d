// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::channel::ChannelKind;
use crate::notifier::{Notifier, Priority};
use tracing::warn;

/// Notifier that writes straight to stdout.
///
/// The workhorse of demos and tests: no configuration, no formatting
/// rules beyond a priority marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Console
    }

    fn send(&self, recipient: &str, message: &str, priority: Priority) -> bool {
        if let Err(e) = self.validate(recipient, message) {
            warn!(channel = %self.channel(), error = %e, "notification rejected");
            return false;
        }

        match priority {
            Priority::Normal => println!("[console] to {recipient}: {message}"),
            other => println!("[console] ({other}) to {recipient}: {message}"),
        }
        true
    }
}
