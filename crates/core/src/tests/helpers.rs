// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, LeaveRequest, apply};
use leave_flow_audit::Actor;
use leave_flow_domain::{EmployeeId, LeaveStatus, LeaveType, RequestId};

pub fn create_employee_actor() -> Actor {
    Actor::new(String::from("EMP001"), String::from("employee"))
}

pub fn create_manager_actor() -> Actor {
    Actor::new(String::from("MGR001"), String::from("manager"))
}

pub fn create_hr_actor() -> Actor {
    Actor::new(String::from("HR001"), String::from("hr"))
}

pub fn create_test_request() -> LeaveRequest {
    LeaveRequest::new(
        RequestId::new("req-1"),
        EmployeeId::new("EMP001"),
        String::from("2026-12-20"),
        String::from("2026-12-25"),
        LeaveType::Paid,
        String::from("Christmas holidays"),
    )
}

/// Drives a fresh request to the given status via the happy path.
pub fn request_in_status(status: LeaveStatus) -> LeaveRequest {
    let mut request: LeaveRequest = create_test_request();

    let steps: [(LeaveStatus, Command, Actor); 4] = [
        (
            LeaveStatus::Submitted,
            Command::Submit,
            create_employee_actor(),
        ),
        (
            LeaveStatus::ManagerReview,
            Command::StartManagerReview,
            create_manager_actor(),
        ),
        (
            LeaveStatus::HrReview,
            Command::ManagerApprove { comment: None },
            create_manager_actor(),
        ),
        (
            LeaveStatus::Approved,
            Command::HrApprove { comment: None },
            create_hr_actor(),
        ),
    ];

    for (reached, command, actor) in steps {
        if request.status == status {
            break;
        }
        request = apply(&request, command, actor).unwrap().new_request;
        debug_assert_eq!(request.status, reached);
    }

    request
}
