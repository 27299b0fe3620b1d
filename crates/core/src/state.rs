// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::notification::OutboundNotification;
use leave_flow_audit::{Action, Actor, History, HistoryEntry};
use leave_flow_domain::{EmployeeId, LeaveStatus, LeaveType, RequestId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An employee's time-off application moving through the approval lifecycle.
///
/// A request is created in `Draft` and mutated only through `apply`, which
/// checks the current status before producing a new request. Requests are
/// process-lifetime objects; there is no persistence layer behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The request identifier.
    pub id: RequestId,
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// Requested range start (ISO 8601 string, parsed where needed).
    pub start_date: String,
    /// Requested range end (ISO 8601 string, parsed where needed).
    pub end_date: String,
    /// The kind of leave requested.
    pub leave_type: LeaveType,
    /// Free-text reason given by the employee.
    pub reason: String,
    /// Current lifecycle status.
    pub status: LeaveStatus,
    /// Append-only log of every status change.
    pub history: History,
    /// Free-text comment left by the manager, if any.
    pub manager_comment: Option<String>,
    /// Free-text comment left by HR, if any.
    pub hr_comment: Option<String>,
}

impl LeaveRequest {
    /// Creates a new leave request in `Draft` status.
    ///
    /// The creation itself is recorded as the first history entry, with
    /// the employee as the acting party.
    ///
    /// # Arguments
    ///
    /// * `id` - The request identifier
    /// * `employee_id` - The requesting employee
    /// * `start_date` - Requested range start (ISO 8601)
    /// * `end_date` - Requested range end (ISO 8601)
    /// * `leave_type` - The kind of leave requested
    /// * `reason` - Free-text reason
    #[must_use]
    pub fn new(
        id: RequestId,
        employee_id: EmployeeId,
        start_date: String,
        end_date: String,
        leave_type: LeaveType,
        reason: String,
    ) -> Self {
        let mut history: History = History::new();
        history.record(HistoryEntry::new(
            OffsetDateTime::now_utc(),
            Actor::new(employee_id.value().to_string(), String::from("employee")),
            Action::new(String::from("Create"), None),
            LeaveStatus::Draft,
        ));

        Self {
            id,
            employee_id,
            start_date,
            end_date,
            leave_type,
            reason,
            status: LeaveStatus::Draft,
            history,
            manager_comment: None,
            hr_comment: None,
        }
    }
}

impl std::fmt::Display for LeaveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LeaveRequest(id={}, employee={}, type={}, status={}, dates={} to {})",
            self.id, self.employee_id, self.leave_type, self.status, self.start_date, self.end_date
        )
    }
}

/// The result of a successful status transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Notifications are returned as data; dispatching them is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new request after the transition.
    pub new_request: LeaveRequest,
    /// The notifications emitted by this transition.
    pub notifications: Vec<OutboundNotification>,
}
