// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave-day entitlement calculation.
//!
//! This module provides pure, deterministic leave-day calculations based
//! on the requested date range, the leave type, and the employee's
//! seniority. Allowance rules are fixed per leave type.

use crate::error::DomainError;
use crate::types::{LeaveType, Seniority};
use crate::validation::{inclusive_day_count, parse_leave_date};
use serde::{Deserialize, Serialize};
use time::Date;

/// Sick leave has no allowance cap; a calendar year acts as the technical
/// ceiling.
const SICK_LEAVE_CEILING_DAYS: u16 = 365;

/// Sick leave longer than this requires a medical certificate.
const MEDICAL_CERTIFICATE_THRESHOLD_DAYS: u16 = 3;

/// Result of a leave-day calculation for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDaysResult {
    /// Days requested (inclusive day count of the range).
    pub requested_days: u16,
    /// Days available for this leave type at this seniority.
    pub available_days: u16,
    /// Whether the request fits the allowance.
    pub is_valid: bool,
    /// Whether a medical certificate must accompany the request
    /// (sick leave over the paperwork threshold).
    pub medical_certificate_required: bool,
}

/// Calculates requested versus available leave days for a request.
///
/// This is a pure, deterministic calculation that:
/// - Counts the requested days as an inclusive range
/// - Derives the available allowance from the leave type and seniority
/// - Flags sick-leave requests that need a medical certificate
///
/// # Arguments
///
/// * `start_date` - The range start as an ISO 8601 string
/// * `end_date` - The range end as an ISO 8601 string
/// * `leave_type` - The kind of leave requested
/// * `seniority` - The employee's seniority
///
/// # Returns
///
/// A `LeaveDaysResult` with requested days, available days, and validity.
///
/// # Errors
///
/// Returns an error if:
/// - Either date is missing or fails to parse
/// - The end date precedes the start date
pub fn calculate_leave_days(
    start_date: &str,
    end_date: &str,
    leave_type: LeaveType,
    seniority: Seniority,
) -> Result<LeaveDaysResult, DomainError> {
    let start: Date = parse_leave_date(start_date, "start")?;
    let end: Date = parse_leave_date(end_date, "end")?;

    let requested_days: u16 = inclusive_day_count(start, end)?;
    let available_days: u16 = available_days_for(leave_type, seniority);

    let medical_certificate_required: bool = leave_type == LeaveType::Sick
        && requested_days > MEDICAL_CERTIFICATE_THRESHOLD_DAYS;

    Ok(LeaveDaysResult {
        requested_days,
        available_days,
        is_valid: requested_days <= available_days,
        medical_certificate_required,
    })
}

/// Returns the allowance in days for a leave type at a given seniority.
#[must_use]
pub const fn available_days_for(leave_type: LeaveType, seniority: Seniority) -> u16 {
    match leave_type {
        LeaveType::Paid => paid_leave_allowance(seniority),
        LeaveType::Rtt => rtt_allowance(seniority),
        LeaveType::Sick => SICK_LEAVE_CEILING_DAYS,
        LeaveType::Unpaid => unpaid_leave_allowance(seniority),
    }
}

/// Paid-leave allowance: pro-rata of 25 days during the first year, then
/// 25 days, 27 from five years, 30 from ten.
const fn paid_leave_allowance(seniority: Seniority) -> u16 {
    let months: u16 = seniority.months();
    if months < 12 {
        // Pro-rata, truncated to whole days.
        25 * months / 12
    } else {
        let years: u16 = seniority.completed_years();
        if years < 5 {
            25
        } else if years < 10 {
            27
        } else {
            30
        }
    }
}

/// RTT allowance: none during the first year, then a flat 12 days.
const fn rtt_allowance(seniority: Seniority) -> u16 {
    if seniority.months() < 12 { 0 } else { 12 }
}

/// Unpaid-leave allowance: none before two years of seniority, then 30 days.
const fn unpaid_leave_allowance(seniority: Seniority) -> u16 {
    if seniority.completed_years() < 2 { 0 } else { 30 }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_leave_allowance_tiers() {
        assert_eq!(paid_leave_allowance(Seniority::from_years(1)), 25);
        assert_eq!(paid_leave_allowance(Seniority::from_years(4)), 25);
        assert_eq!(paid_leave_allowance(Seniority::from_years(5)), 27);
        assert_eq!(paid_leave_allowance(Seniority::from_years(9)), 27);
        assert_eq!(paid_leave_allowance(Seniority::from_years(10)), 30);
        assert_eq!(paid_leave_allowance(Seniority::from_years(25)), 30);
    }

    #[test]
    fn test_paid_leave_allowance_first_year_pro_rata() {
        assert_eq!(paid_leave_allowance(Seniority::from_months(0)), 0);
        // 25 * 6 / 12 = 12.5, truncated
        assert_eq!(paid_leave_allowance(Seniority::from_months(6)), 12);
        assert_eq!(paid_leave_allowance(Seniority::from_months(11)), 22);
        assert_eq!(paid_leave_allowance(Seniority::from_months(12)), 25);
    }

    #[test]
    fn test_rtt_allowance() {
        assert_eq!(rtt_allowance(Seniority::from_months(11)), 0);
        assert_eq!(rtt_allowance(Seniority::from_years(1)), 12);
        assert_eq!(rtt_allowance(Seniority::from_years(20)), 12);
    }

    #[test]
    fn test_unpaid_leave_allowance() {
        assert_eq!(unpaid_leave_allowance(Seniority::from_years(0)), 0);
        assert_eq!(unpaid_leave_allowance(Seniority::from_months(23)), 0);
        assert_eq!(unpaid_leave_allowance(Seniority::from_years(2)), 30);
    }

    #[test]
    fn test_paid_leave_three_years_six_day_range() {
        let result: LeaveDaysResult = calculate_leave_days(
            "2026-12-20",
            "2026-12-25",
            LeaveType::Paid,
            Seniority::from_years(3),
        )
        .unwrap();

        assert_eq!(result.requested_days, 6);
        assert_eq!(result.available_days, 25);
        assert!(result.is_valid);
        assert!(!result.medical_certificate_required);
    }

    #[test]
    fn test_single_day_request_counts_one_day() {
        let result: LeaveDaysResult = calculate_leave_days(
            "2026-03-09",
            "2026-03-09",
            LeaveType::Paid,
            Seniority::from_years(3),
        )
        .unwrap();

        assert_eq!(result.requested_days, 1);
    }

    #[test]
    fn test_request_over_allowance_is_invalid() {
        let result: LeaveDaysResult = calculate_leave_days(
            "2026-06-01",
            "2026-06-30",
            LeaveType::Paid,
            Seniority::from_years(3),
        )
        .unwrap();

        assert_eq!(result.requested_days, 30);
        assert_eq!(result.available_days, 25);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_rtt_before_one_year_is_invalid() {
        let result: LeaveDaysResult = calculate_leave_days(
            "2026-06-01",
            "2026-06-02",
            LeaveType::Rtt,
            Seniority::from_months(6),
        )
        .unwrap();

        assert_eq!(result.available_days, 0);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_sick_leave_over_three_days_flags_certificate() {
        let result: LeaveDaysResult = calculate_leave_days(
            "2026-02-02",
            "2026-02-05",
            LeaveType::Sick,
            Seniority::from_years(1),
        )
        .unwrap();

        assert_eq!(result.requested_days, 4);
        assert!(result.is_valid);
        assert!(result.medical_certificate_required);
    }

    #[test]
    fn test_sick_leave_at_threshold_needs_no_certificate() {
        let result: LeaveDaysResult = calculate_leave_days(
            "2026-02-02",
            "2026-02-04",
            LeaveType::Sick,
            Seniority::from_years(1),
        )
        .unwrap();

        assert_eq!(result.requested_days, 3);
        assert!(!result.medical_certificate_required);
    }

    #[test]
    fn test_unpaid_leave_before_two_years_is_invalid() {
        let result: LeaveDaysResult = calculate_leave_days(
            "2026-06-01",
            "2026-06-05",
            LeaveType::Unpaid,
            Seniority::from_years(1),
        )
        .unwrap();

        assert_eq!(result.available_days, 0);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        let result = calculate_leave_days(
            "2026-06-10",
            "2026-06-01",
            LeaveType::Paid,
            Seniority::from_years(3),
        );

        assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let result = calculate_leave_days(
            "not-a-date",
            "2026-06-01",
            LeaveType::Paid,
            Seniority::from_years(3),
        );

        assert!(matches!(result, Err(DomainError::DateParseError { .. })));
    }

    #[test]
    fn test_missing_date_is_an_error() {
        let result =
            calculate_leave_days("", "2026-06-01", LeaveType::Paid, Seniority::from_years(3));

        assert!(matches!(
            result,
            Err(DomainError::MissingDate { field: "start" })
        ));
    }

    #[test]
    fn test_calculation_deterministic() {
        let result1: LeaveDaysResult = calculate_leave_days(
            "2026-12-20",
            "2026-12-25",
            LeaveType::Paid,
            Seniority::from_years(3),
        )
        .unwrap();
        let result2: LeaveDaysResult = calculate_leave_days(
            "2026-12-20",
            "2026-12-25",
            LeaveType::Paid,
            Seniority::from_years(3),
        )
        .unwrap();

        assert_eq!(result1, result2);
    }
}
