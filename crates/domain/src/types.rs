// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents an employee identifier.
///
/// The employee id is the sole identifier for the requester of a leave
/// request; there is no user directory behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId {
    /// The identifier value (e.g., "EMP001").
    value: String,
}

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a leave-request identifier.
///
/// Identifiers are supplied by the caller; the domain does not generate
/// them and does not require any particular format beyond being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId {
    /// The identifier value.
    value: String,
}

impl RequestId {
    /// Creates a new `RequestId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The kind of leave being requested.
///
/// The string tags ("CP", "RTT", "maladie", "sans_solde") are the wire
/// format inherited from the HR system and are preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    /// Paid leave ("congés payés"). Allowance scales with seniority.
    #[serde(rename = "CP")]
    Paid,
    /// Working-time-reduction days. Flat allowance after one year.
    #[serde(rename = "RTT")]
    Rtt,
    /// Sick leave. No allowance cap, but paperwork rules apply.
    #[serde(rename = "maladie")]
    Sick,
    /// Unpaid leave. Requires two years of seniority.
    #[serde(rename = "sans_solde")]
    Unpaid,
}

impl LeaveType {
    /// Returns the string tag for this leave type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "CP",
            Self::Rtt => "RTT",
            Self::Sick => "maladie",
            Self::Unpaid => "sans_solde",
        }
    }

    /// Parses a leave type from its string tag.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLeaveType` if the tag is not recognized.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "CP" => Ok(Self::Paid),
            "RTT" => Ok(Self::Rtt),
            "maladie" => Ok(Self::Sick),
            "sans_solde" => Ok(Self::Unpaid),
            _ => Err(DomainError::InvalidLeaveType(s.to_string())),
        }
    }
}

impl FromStr for LeaveType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An employee's seniority, stored in whole months.
///
/// Months rather than years because the paid-leave allowance is pro-rated
/// during the first year of employment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Seniority {
    /// Whole months of employment.
    months: u16,
}

impl Seniority {
    /// Creates a `Seniority` from whole months.
    ///
    /// # Arguments
    ///
    /// * `months` - Whole months of employment
    #[must_use]
    pub const fn from_months(months: u16) -> Self {
        Self { months }
    }

    /// Creates a `Seniority` from whole years.
    ///
    /// # Arguments
    ///
    /// * `years` - Whole years of employment
    #[must_use]
    pub const fn from_years(years: u16) -> Self {
        Self {
            months: years.saturating_mul(12),
        }
    }

    /// Returns the whole months of employment.
    #[must_use]
    pub const fn months(&self) -> u16 {
        self.months
    }

    /// Returns the number of completed years of employment.
    #[must_use]
    pub const fn completed_years(&self) -> u16 {
        self.months / 12
    }
}
