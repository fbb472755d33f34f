//! Attendance Model
//!
//! One record per employee per calendar day, enforced by a unique index.
//! `hoursWorked` is derived on clock-out (manual or automatic), rounded to
//! two decimals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type AttendanceId = RecordId;

/// Attendance entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AttendanceId>,

    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,

    /// Employee name snapshot
    pub employee_name: String,

    /// Calendar day (server-local)
    pub date: NaiveDate,

    /// Clock-in instant (Unix millis)
    pub clock_in: i64,

    /// Clock-out instant (Unix millis), absent while the day is open
    pub clock_out: Option<i64>,

    /// Set when the clock-out was produced by the batch job
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub auto_clock_out: bool,

    /// Elapsed hours, two decimals
    pub hours_worked: Option<f64>,
}

/// One successfully auto-closed record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoClockOutResult {
    pub employee_id: String,
    pub employee_name: String,
    pub clock_out: i64,
    pub hours_worked: f64,
}

/// Batch outcome — failed records are skipped, never abort the batch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoClockOutResponse {
    pub updated: Vec<AutoClockOutResult>,
    pub skipped: usize,
}
