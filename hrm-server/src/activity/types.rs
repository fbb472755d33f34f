//! Activity log types
//!
//! Entries are append-only: nothing in the application ever updates or
//! deletes one.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::db::models::serde_helpers;

/// Activity action tag (enum, not free text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    /// Page load inside a role tree
    View,
    Login,
    LoginFailed,
    Logout,
    Register,
    Create,
    Update,
    Delete,
    Approve,
    Reject,
    ClockIn,
    ClockOut,
    AutoClockOut,
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Module tag — which part of the application an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityModule {
    Auth,
    Profile,
    Employees,
    Leave,
    Payroll,
    Announcements,
    Attendance,
    ActivityLog,
    Dashboard,
}

impl ActivityModule {
    /// Infer the module from a request path (fixed substring rules)
    pub fn from_path(path: &str) -> Self {
        if matches!(path, "/hr" | "/manager" | "/employee") {
            Self::Dashboard
        } else if path.contains("leave") {
            Self::Leave
        } else if path.contains("payroll") {
            Self::Payroll
        } else if path.contains("announcement") {
            Self::Announcements
        } else if path.contains("attendance") {
            Self::Attendance
        } else if path.contains("activity-log") {
            Self::ActivityLog
        } else if path.contains("profile") {
            Self::Profile
        } else if path.contains("employee") || path.contains("status") {
            Self::Employees
        } else {
            Self::Dashboard
        }
    }
}

impl std::fmt::Display for ActivityModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Activity log entry (append-only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Actor account id; None for unauthenticated events (failed logins)
    pub actor_id: Option<String>,
    pub actor_name: Option<String>,
    /// Actor role tag at the time of the action
    pub role: Option<String>,
    pub action: ActivityAction,
    pub module: ActivityModule,
    /// Free-text detail (request path, resource id, reason)
    pub details: String,
    /// Source address when the proxy forwards one
    pub ip: Option<String>,
    /// Unix millis
    pub timestamp: i64,
}

/// Activity log query parameters (`GET /hr/activity-log`)
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityQuery {
    /// Start of time range (Unix millis, inclusive)
    pub from: Option<i64>,
    /// End of time range (Unix millis, inclusive)
    pub to: Option<i64>,
    pub module: Option<ActivityModule>,
    pub actor_id: Option<String>,
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Activity log list response
#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub items: Vec<ActivityEntry>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_inference() {
        assert_eq!(ActivityModule::from_path("/manager/leave-requests"), ActivityModule::Leave);
        assert_eq!(ActivityModule::from_path("/hr/payroll"), ActivityModule::Payroll);
        assert_eq!(ActivityModule::from_path("/employee/profile"), ActivityModule::Profile);
        assert_eq!(
            ActivityModule::from_path("/employee/attendance/clock-in"),
            ActivityModule::Attendance
        );
        assert_eq!(ActivityModule::from_path("/hr"), ActivityModule::Dashboard);
        assert_eq!(ActivityModule::from_path("/manager"), ActivityModule::Dashboard);
        assert_eq!(ActivityModule::from_path("/employee"), ActivityModule::Dashboard);
        assert_eq!(ActivityModule::from_path("/employee/status"), ActivityModule::Employees);
    }
}
