// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]

mod channel;
mod config;
mod console;
mod email;
mod error;
mod notifier;
mod push;
mod registry;
mod service;
mod slack;
mod sms;

pub use channel::ChannelKind;
pub use config::{EmailConfig, NotifyConfig, PushConfig, SlackConfig, SmsConfig};
pub use console::ConsoleNotifier;
pub use email::EmailNotifier;
pub use error::{MAX_MESSAGE_CHARS, NotifyError};
pub use notifier::{Notifier, Priority};
pub use push::PushNotifier;
pub use registry::NotifierRegistry;
pub use service::{BulkOutcome, DispatchStats, NotificationService};
pub use slack::SlackNotifier;
pub use sms::SmsNotifier;
