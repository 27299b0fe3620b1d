// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidEmployeeId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid employee id: test");

    let err: DomainError = DomainError::InvalidRequestId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid request id: test");

    let err: DomainError = DomainError::InvalidLeaveType(String::from("sabbatical"));
    assert_eq!(format!("{err}"), "Unknown leave type: 'sabbatical'");

    let err: DomainError = DomainError::InvalidLeaveStatus {
        status: String::from("pending"),
    };
    assert_eq!(format!("{err}"), "Unknown leave status: 'pending'");

    let err: DomainError = DomainError::InvalidStatusTransition {
        from: String::from("draft"),
        to: String::from("approved"),
        reason: String::from("test"),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot transition from 'draft' to 'approved': test"
    );

    let err: DomainError = DomainError::MissingDate { field: "start" };
    assert_eq!(format!("{err}"), "Missing start date");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("20/12/2026"),
        error: String::from("test"),
    };
    assert_eq!(format!("{err}"), "Failed to parse date '20/12/2026': test");

    let err: DomainError = DomainError::InvalidDateRange {
        start_date: date!(2026 - 06 - 10),
        end_date: date!(2026 - 06 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "End date 2026-06-01 is before start date 2026-06-10"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("test"),
    };
    assert_eq!(format!("{err}"), "Date arithmetic overflow while test");
}
