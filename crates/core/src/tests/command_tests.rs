// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_employee_actor, request_in_status};
use crate::{Command, LeaveRequest, apply};
use leave_flow_domain::LeaveStatus;

#[test]
fn test_command_names() {
    assert_eq!(Command::Submit.name(), "Submit");
    assert_eq!(Command::StartManagerReview.name(), "StartManagerReview");
    assert_eq!(
        Command::ManagerApprove { comment: None }.name(),
        "ManagerApprove"
    );
    assert_eq!(
        Command::ManagerReject { comment: None }.name(),
        "ManagerReject"
    );
    assert_eq!(Command::HrApprove { comment: None }.name(), "HrApprove");
    assert_eq!(Command::HrReject { comment: None }.name(), "HrReject");
    assert_eq!(Command::Cancel.name(), "Cancel");
}

#[test]
fn test_available_actions_per_status() {
    assert_eq!(
        Command::available_for(LeaveStatus::Draft),
        &["Submit", "Cancel"]
    );
    assert_eq!(
        Command::available_for(LeaveStatus::Submitted),
        &["StartManagerReview", "Cancel"]
    );
    assert_eq!(
        Command::available_for(LeaveStatus::ManagerReview),
        &["ManagerApprove", "ManagerReject", "Cancel"]
    );
    assert_eq!(
        Command::available_for(LeaveStatus::HrReview),
        &["HrApprove", "HrReject", "Cancel"]
    );
}

#[test]
fn test_terminal_statuses_offer_no_actions() {
    assert!(Command::available_for(LeaveStatus::Approved).is_empty());
    assert!(Command::available_for(LeaveStatus::Rejected).is_empty());
    assert!(Command::available_for(LeaveStatus::Cancelled).is_empty());
}

fn command_by_name(name: &str) -> Command {
    match name {
        "Submit" => Command::Submit,
        "StartManagerReview" => Command::StartManagerReview,
        "ManagerApprove" => Command::ManagerApprove { comment: None },
        "ManagerReject" => Command::ManagerReject { comment: None },
        "HrApprove" => Command::HrApprove { comment: None },
        "HrReject" => Command::HrReject { comment: None },
        "Cancel" => Command::Cancel,
        other => panic!("unknown command name: {other}"),
    }
}

#[test]
fn test_listed_actions_actually_apply() {
    let statuses: [LeaveStatus; 4] = [
        LeaveStatus::Draft,
        LeaveStatus::Submitted,
        LeaveStatus::ManagerReview,
        LeaveStatus::HrReview,
    ];

    for status in statuses {
        for name in Command::available_for(status) {
            let request: LeaveRequest = request_in_status(status);
            let result = apply(&request, command_by_name(name), create_employee_actor());
            assert!(
                result.is_ok(),
                "command {name} should apply in status {status}"
            );
        }
    }
}

#[test]
fn test_unlisted_actions_are_refused() {
    let statuses: [LeaveStatus; 7] = [
        LeaveStatus::Draft,
        LeaveStatus::Submitted,
        LeaveStatus::ManagerReview,
        LeaveStatus::HrReview,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
        LeaveStatus::Cancelled,
    ];
    let all_names: [&str; 7] = [
        "Submit",
        "StartManagerReview",
        "ManagerApprove",
        "ManagerReject",
        "HrApprove",
        "HrReject",
        "Cancel",
    ];

    for status in statuses {
        // Terminal fixtures are reachable from the happy path plus one step
        let request: LeaveRequest = match status {
            LeaveStatus::Rejected => {
                let in_review: LeaveRequest = request_in_status(LeaveStatus::HrReview);
                apply(
                    &in_review,
                    Command::HrReject { comment: None },
                    create_employee_actor(),
                )
                .unwrap()
                .new_request
            }
            LeaveStatus::Cancelled => {
                let draft: LeaveRequest = request_in_status(LeaveStatus::Draft);
                apply(&draft, Command::Cancel, create_employee_actor())
                    .unwrap()
                    .new_request
            }
            _ => request_in_status(status),
        };
        assert_eq!(request.status, status);

        let listed: &[&str] = Command::available_for(status);
        for name in all_names {
            if listed.contains(&name) {
                continue;
            }
            let result = apply(&request, command_by_name(name), create_employee_actor());
            assert!(
                result.is_err(),
                "command {name} should be refused in status {status}"
            );
        }
    }
}
