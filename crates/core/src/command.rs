// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leave_flow_domain::LeaveStatus;

/// A command represents user intent as data only.
///
/// Commands are the only way to request status changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the draft request for review.
    Submit,
    /// The manager picks up a submitted request.
    StartManagerReview,
    /// The manager approves, forwarding the request to HR.
    ManagerApprove {
        /// Optional review comment.
        comment: Option<String>,
    },
    /// The manager rejects the request.
    ManagerReject {
        /// Optional review comment.
        comment: Option<String>,
    },
    /// HR gives the final approval.
    HrApprove {
        /// Optional review comment.
        comment: Option<String>,
    },
    /// HR rejects the request.
    HrReject {
        /// Optional review comment.
        comment: Option<String>,
    },
    /// Withdraw the request before a final decision.
    Cancel,
}

impl Command {
    /// Returns the name of this command.
    ///
    /// This is used for history entries and the available-actions listing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::StartManagerReview => "StartManagerReview",
            Self::ManagerApprove { .. } => "ManagerApprove",
            Self::ManagerReject { .. } => "ManagerReject",
            Self::HrApprove { .. } => "HrApprove",
            Self::HrReject { .. } => "HrReject",
            Self::Cancel => "Cancel",
        }
    }

    /// Returns the names of the commands legal in a given status.
    ///
    /// Terminal statuses have no legal commands.
    #[must_use]
    pub const fn available_for(status: LeaveStatus) -> &'static [&'static str] {
        match status {
            LeaveStatus::Draft => &["Submit", "Cancel"],
            LeaveStatus::Submitted => &["StartManagerReview", "Cancel"],
            LeaveStatus::ManagerReview => &["ManagerApprove", "ManagerReject", "Cancel"],
            LeaveStatus::HrReview => &["HrApprove", "HrReject", "Cancel"],
            LeaveStatus::Approved | LeaveStatus::Rejected | LeaveStatus::Cancelled => &[],
        }
    }
}
