// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{EmployeeId, RequestId};
use time::Date;

/// Parses a leave date from its ISO 8601 string form.
///
/// Dates travel through the system as strings (the HR export format) and
/// are parsed only where a calculation or validation needs them.
///
/// # Arguments
///
/// * `value` - The date string, e.g. "2026-12-20"
/// * `field` - Which date field this is, for error reporting
///
/// # Returns
///
/// The parsed `Date`.
///
/// # Errors
///
/// Returns an error if the string is empty or fails to parse.
pub fn parse_leave_date(value: &str, field: &'static str) -> Result<Date, DomainError> {
    if value.is_empty() {
        return Err(DomainError::MissingDate { field });
    }

    Date::parse(
        value,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Validates that a date range is ordered (end on or after start).
///
/// # Arguments
///
/// * `start_date` - The range start
/// * `end_date` - The range end
///
/// # Returns
///
/// * `Ok(())` if the range is ordered
/// * `Err(DomainError::InvalidDateRange)` otherwise
///
/// # Errors
///
/// Returns an error if the end date precedes the start date.
pub fn validate_date_order(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if end_date < start_date {
        return Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

/// Counts the days in an inclusive date range.
///
/// A single-day request (start == end) counts as one day.
///
/// # Arguments
///
/// * `start_date` - The range start
/// * `end_date` - The range end (must be on or after the start)
///
/// # Returns
///
/// The inclusive day count.
///
/// # Errors
///
/// Returns an error if the range is reversed or the count does not fit
/// the day-count type.
pub fn inclusive_day_count(start_date: Date, end_date: Date) -> Result<u16, DomainError> {
    validate_date_order(start_date, end_date)?;

    let whole_days: i64 = (end_date - start_date).whole_days() + 1;
    u16::try_from(whole_days).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("counting days between {start_date} and {end_date}"),
    })
}

/// Validates that an employee identifier is present.
///
/// # Arguments
///
/// * `employee_id` - The identifier to validate
///
/// # Returns
///
/// * `Ok(())` if the identifier is non-empty
/// * `Err(DomainError::InvalidEmployeeId)` otherwise
///
/// # Errors
///
/// Returns an error if the identifier is empty.
pub fn validate_employee_id(employee_id: &EmployeeId) -> Result<(), DomainError> {
    if employee_id.value().is_empty() {
        return Err(DomainError::InvalidEmployeeId(String::from(
            "Employee id cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a request identifier is present.
///
/// # Arguments
///
/// * `request_id` - The identifier to validate
///
/// # Returns
///
/// * `Ok(())` if the identifier is non-empty
/// * `Err(DomainError::InvalidRequestId)` otherwise
///
/// # Errors
///
/// Returns an error if the identifier is empty.
pub fn validate_request_id(request_id: &RequestId) -> Result<(), DomainError> {
    if request_id.value().is_empty() {
        return Err(DomainError::InvalidRequestId(String::from(
            "Request id cannot be empty",
        )));
    }
    Ok(())
}
