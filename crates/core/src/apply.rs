// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::notification::OutboundNotification;
use crate::state::{LeaveRequest, TransitionResult};
use leave_flow_audit::{Action, Actor, HistoryEntry};
use leave_flow_domain::{
    DomainError, EmployeeId, LeaveStatus, parse_leave_date, validate_date_order,
};
use time::{Date, OffsetDateTime};

/// Address notified when a request needs manager attention.
const MANAGER_ADDRESS: &str = "manager@techflow.example";

/// Address notified when a request needs HR attention.
const HR_ADDRESS: &str = "hr@techflow.example";

/// Builds the notification address for an employee.
fn employee_address(employee_id: &EmployeeId) -> String {
    format!("employee_{}@techflow.example", employee_id.value())
}

/// Applies a command to a leave request, producing a new request and the
/// notifications the transition emits.
///
/// Each command guards on the current status before anything is changed.
/// The input request is never mutated: on success a complete new request
/// is returned with exactly one history entry appended; on error nothing
/// has happened.
///
/// # Arguments
///
/// * `request` - The current request (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new request and notifications
/// * `Err(CoreError)` if the command is invalid for the current status
///
/// # Errors
///
/// Returns an error if:
/// - The current status does not permit the command
/// - `Submit` finds the dates missing, malformed, or reversed
#[allow(clippy::too_many_lines)]
pub fn apply(
    request: &LeaveRequest,
    command: Command,
    actor: Actor,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Submit => {
            request.status.validate_transition(LeaveStatus::Submitted)?;

            // A request only has to carry valid dates once it leaves Draft
            let start: Date = parse_leave_date(&request.start_date, "start")?;
            let end: Date = parse_leave_date(&request.end_date, "end")?;
            validate_date_order(start, end)?;

            let mut new_request: LeaveRequest = request.clone();
            new_request.status = LeaveStatus::Submitted;
            new_request.history.record(HistoryEntry::new(
                OffsetDateTime::now_utc(),
                actor,
                Action::new(String::from("Submit"), None),
                LeaveStatus::Submitted,
            ));

            let notification: OutboundNotification = OutboundNotification::new(
                format!(
                    "New leave request from employee {}",
                    request.employee_id.value()
                ),
                vec![String::from(MANAGER_ADDRESS)],
            );

            Ok(TransitionResult {
                new_request,
                notifications: vec![notification],
            })
        }
        Command::StartManagerReview => {
            request
                .status
                .validate_transition(LeaveStatus::ManagerReview)?;

            let mut new_request: LeaveRequest = request.clone();
            new_request.status = LeaveStatus::ManagerReview;
            new_request.history.record(HistoryEntry::new(
                OffsetDateTime::now_utc(),
                actor,
                Action::new(String::from("StartManagerReview"), None),
                LeaveStatus::ManagerReview,
            ));

            // Picking up a request notifies nobody; the manager already knows
            Ok(TransitionResult {
                new_request,
                notifications: Vec::new(),
            })
        }
        Command::ManagerApprove { comment } => {
            request.status.validate_transition(LeaveStatus::HrReview)?;

            let mut new_request: LeaveRequest = request.clone();
            new_request.status = LeaveStatus::HrReview;
            new_request.manager_comment.clone_from(&comment);
            new_request.history.record(HistoryEntry::new(
                OffsetDateTime::now_utc(),
                actor,
                Action::new(String::from("ManagerApprove"), comment),
                LeaveStatus::HrReview,
            ));

            let notification: OutboundNotification = OutboundNotification::new(
                format!(
                    "Request {} approved by manager, awaiting HR review",
                    request.id.value()
                ),
                vec![String::from(HR_ADDRESS)],
            );

            Ok(TransitionResult {
                new_request,
                notifications: vec![notification],
            })
        }
        Command::ManagerReject { comment } => {
            // Rejected is reachable from both review stages; this command
            // is the manager's alone
            if request.status != LeaveStatus::ManagerReview {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidStatusTransition {
                        from: request.status.as_str().to_string(),
                        to: LeaveStatus::Rejected.as_str().to_string(),
                        reason: "manager rejection requires manager review".to_string(),
                    },
                ));
            }
            request.status.validate_transition(LeaveStatus::Rejected)?;

            let mut new_request: LeaveRequest = request.clone();
            new_request.status = LeaveStatus::Rejected;
            new_request.manager_comment.clone_from(&comment);

            let message: String = comment.as_ref().map_or_else(
                || String::from("Your leave request has been rejected"),
                |c| format!("Your leave request has been rejected: {c}"),
            );

            new_request.history.record(HistoryEntry::new(
                OffsetDateTime::now_utc(),
                actor,
                Action::new(String::from("ManagerReject"), comment),
                LeaveStatus::Rejected,
            ));

            let notification: OutboundNotification =
                OutboundNotification::new(message, vec![employee_address(&request.employee_id)]);

            Ok(TransitionResult {
                new_request,
                notifications: vec![notification],
            })
        }
        Command::HrApprove { comment } => {
            request.status.validate_transition(LeaveStatus::Approved)?;

            let mut new_request: LeaveRequest = request.clone();
            new_request.status = LeaveStatus::Approved;
            new_request.hr_comment.clone_from(&comment);
            new_request.history.record(HistoryEntry::new(
                OffsetDateTime::now_utc(),
                actor,
                Action::new(String::from("HrApprove"), comment),
                LeaveStatus::Approved,
            ));

            let notification: OutboundNotification = OutboundNotification::new(
                format!(
                    "Your leave request from {} to {} is approved",
                    request.start_date, request.end_date
                ),
                vec![
                    employee_address(&request.employee_id),
                    String::from(MANAGER_ADDRESS),
                ],
            );

            Ok(TransitionResult {
                new_request,
                notifications: vec![notification],
            })
        }
        Command::HrReject { comment } => {
            // Rejected is reachable from both review stages; this command
            // is HR's alone
            if request.status != LeaveStatus::HrReview {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidStatusTransition {
                        from: request.status.as_str().to_string(),
                        to: LeaveStatus::Rejected.as_str().to_string(),
                        reason: "HR rejection requires HR review".to_string(),
                    },
                ));
            }
            request.status.validate_transition(LeaveStatus::Rejected)?;

            let mut new_request: LeaveRequest = request.clone();
            new_request.status = LeaveStatus::Rejected;
            new_request.hr_comment.clone_from(&comment);

            let message: String = comment.as_ref().map_or_else(
                || String::from("Your leave request has been rejected by HR"),
                |c| format!("Your leave request has been rejected by HR: {c}"),
            );

            new_request.history.record(HistoryEntry::new(
                OffsetDateTime::now_utc(),
                actor,
                Action::new(String::from("HrReject"), comment),
                LeaveStatus::Rejected,
            ));

            let notification: OutboundNotification =
                OutboundNotification::new(message, vec![employee_address(&request.employee_id)]);

            Ok(TransitionResult {
                new_request,
                notifications: vec![notification],
            })
        }
        Command::Cancel => {
            request.status.validate_transition(LeaveStatus::Cancelled)?;

            let mut new_request: LeaveRequest = request.clone();
            new_request.status = LeaveStatus::Cancelled;
            new_request.history.record(HistoryEntry::new(
                OffsetDateTime::now_utc(),
                actor,
                Action::new(String::from("Cancel"), None),
                LeaveStatus::Cancelled,
            ));

            let notification: OutboundNotification = OutboundNotification::new(
                format!("Leave request {} cancelled", request.id.value()),
                vec![String::from(MANAGER_ADDRESS), String::from(HR_ADDRESS)],
            );

            Ok(TransitionResult {
                new_request,
                notifications: vec![notification],
            })
        }
    }
}
