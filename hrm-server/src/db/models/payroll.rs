//! Payroll Model
//!
//! `netSalary` is derived: base + bonus − deduction. It is recomputed by the
//! repository on every write that touches those fields and is never
//! independently settable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type PayrollId = RecordId;

/// Payroll processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrollStatus {
    Pending,
    Processing,
    Paid,
}

impl Default for PayrollStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl PayrollStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Processing" => Some(Self::Processing),
            "Paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

/// Payroll record entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<PayrollId>,

    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,

    /// Employee name snapshot (search target)
    pub employee_name: String,

    /// Department snapshot (filter target)
    pub department: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub base_salary: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
    pub bonus_description: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    pub deduction: Decimal,
    pub deduction_description: Option<String>,

    /// Derived: baseSalary + bonus − deduction
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,

    #[serde(default)]
    pub status: PayrollStatus,

    /// Month tag (YYYY-MM)
    pub month: String,

    pub created_at: i64,
}

/// Create payroll record body (`POST /payroll`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCreate {
    pub employee_id: Option<String>,
    pub month: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub base_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub bonus: Option<Decimal>,
    pub bonus_description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub deduction: Option<Decimal>,
    pub deduction_description: Option<String>,
}

/// Update payroll record body (`PATCH /payroll`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollUpdate {
    pub id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub base_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub bonus: Option<Decimal>,
    pub bonus_description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub deduction: Option<Decimal>,
    pub deduction_description: Option<String>,
    pub status: Option<String>,
    pub month: Option<String>,
}

/// List filters (`GET /payroll`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollQuery {
    pub month: Option<String>,
    pub search: Option<String>,
    pub department: Option<String>,
}
