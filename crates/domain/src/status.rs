// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave-request status tracking and transition logic.
//!
//! This module defines the request lifecycle states and valid transitions.
//! Transitions are actor-initiated only; the system never advances a
//! request based on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a leave request.
///
/// A request starts in `Draft` and moves through review toward one of the
/// three terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Being edited by the employee; not yet visible to reviewers.
    #[default]
    Draft,
    /// Submitted by the employee, waiting for the manager to pick it up.
    Submitted,
    /// Under review by the manager.
    ManagerReview,
    /// Approved by the manager, under review by HR.
    HrReview,
    /// Approved by HR. Terminal.
    Approved,
    /// Rejected by the manager or HR. Terminal.
    Rejected,
    /// Withdrawn before a final decision. Terminal.
    Cancelled,
}

impl LeaveStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for history entries and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::ManagerReview => "manager_review",
            Self::HrReview => "hr_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLeaveStatus` if the string is not a
    /// valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "manager_review" => Ok(Self::ManagerReview),
            "hr_review" => Ok(Self::HrReview),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidLeaveStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Cancelled)
    }

    /// Returns true if a request in this status may still be cancelled.
    #[must_use]
    pub const fn is_cancellable(&self) -> bool {
        matches!(
            self,
            Self::Draft | Self::Submitted | Self::ManagerReview | Self::HrReview
        )
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `Draft` → `Submitted` | `Cancelled`
    /// - `Submitted` → `ManagerReview` | `Cancelled`
    /// - `ManagerReview` → `HrReview` | `Rejected` | `Cancelled`
    /// - `HrReview` → `Approved` | `Rejected` | `Cancelled`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Submitted)
                | (Self::Submitted, Self::ManagerReview)
                | (Self::ManagerReview, Self::HrReview | Self::Rejected)
                | (Self::HrReview, Self::Approved | Self::Rejected)
                | (
                    Self::Draft | Self::Submitted | Self::ManagerReview | Self::HrReview,
                    Self::Cancelled
                )
        )
    }

    /// Validates that a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition out of terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        if self.can_transition_to(new_status) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by status lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for LeaveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
