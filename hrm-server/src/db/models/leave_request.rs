//! Leave Request Model
//!
//! Lifecycle: created Pending by the owning employee, resolved exactly once
//! by an approver (status, approver and approval timestamp move together),
//! deletable by the owner only while still Pending.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type LeaveRequestId = RecordId;

/// Leave request status — Pending is initial, the other two are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for LeaveStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl LeaveStatus {
    /// Parse an approver's decision — only the terminal states are valid
    pub fn parse_decision(value: &str) -> Option<Self> {
        match value {
            "Approved" => Some(Self::Approved),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Leave request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<LeaveRequestId>,

    /// Owning employee
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,

    /// Employee name snapshot
    pub employee_name: String,

    /// Leave category (annual, sick, unpaid, ...)
    pub leave_type: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Free-text reason
    pub reason: String,

    #[serde(default)]
    pub status: LeaveStatus,

    /// Approver — set together with status and approvalDate, never alone
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub approved_by: Option<RecordId>,

    pub approval_date: Option<i64>,

    pub created_at: i64,
}

/// Create leave request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCreate {
    pub leave_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub reason: Option<String>,
}

/// Single-request decision body (`PUT /leave/{id}`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecision {
    pub status: Option<String>,
}

/// Bulk decision body (`PUT /manager/leave-requests`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkLeaveDecision {
    #[serde(default)]
    pub request_ids: Vec<String>,
    pub status: Option<String>,
}

/// Bulk decision outcome — per-item isolation, skipped ids are reported
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkLeaveOutcome {
    pub updated: Vec<LeaveRequest>,
    pub skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_parse() {
        assert_eq!(LeaveStatus::parse_decision("Approved"), Some(LeaveStatus::Approved));
        assert_eq!(LeaveStatus::parse_decision("Rejected"), Some(LeaveStatus::Rejected));
        // Pending is not a decision an approver can submit
        assert_eq!(LeaveStatus::parse_decision("Pending"), None);
        assert_eq!(LeaveStatus::parse_decision("approved"), None);
    }
}
