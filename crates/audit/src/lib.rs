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
    clippy::all
)]

use leave_flow_domain::LeaveStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a status change.
/// This could be the employee, their manager, HR, or the system itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role of the actor (e.g., "employee", "manager", "hr", "system").
    pub role: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role of the actor
    #[must_use]
    pub const fn new(id: String, role: String) -> Self {
        Self { id, role }
    }
}

/// Represents the specific action performed.
///
/// An action describes what status change occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`Submit`", "`ManagerApprove`").
    pub name: String,
    /// Optional additional details about the action (e.g., a review comment).
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// An immutable history entry recording one status change.
///
/// Every successful transition must produce exactly one history entry.
/// Entries are immutable once created and capture:
/// - When the change happened (timestamp)
/// - Who performed it (actor)
/// - What was done (action)
/// - The status the request ended up in (`resulting_status`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When this entry was recorded (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// The actor who initiated this status change.
    pub actor: Actor,
    /// The action that was performed.
    pub action: Action,
    /// The status the request held after the action.
    pub resulting_status: LeaveStatus,
}

impl HistoryEntry {
    /// Creates a new `HistoryEntry`.
    ///
    /// Once created, a history entry is immutable.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - When the change happened
    /// * `actor` - The actor who initiated the change
    /// * `action` - The action that was performed
    /// * `resulting_status` - The status after the action
    #[must_use]
    pub const fn new(
        timestamp: OffsetDateTime,
        actor: Actor,
        action: Action,
        resulting_status: LeaveStatus,
    ) -> Self {
        Self {
            timestamp,
            actor,
            action,
            resulting_status,
        }
    }
}

/// An append-only log of history entries.
///
/// Entries can be recorded and read but never removed or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a new empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the history.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns all recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
