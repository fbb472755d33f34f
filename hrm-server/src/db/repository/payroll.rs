//! Payroll Repository
//!
//! Money fields are `rust_decimal::Decimal` in Rust and plain numbers in the
//! store; `netSalary` is recomputed here on every write that can change it.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{PayrollQuery, PayrollRecord, PayrollStatus, PayrollUpdate};

const TABLE: &str = "payroll";

/// Bind-friendly float form; the store keeps plain numbers
fn money(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[derive(Clone)]
pub struct PayrollRepository {
    base: BaseRepository,
}

impl PayrollRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a payroll record for an employee/month
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        employee: RecordId,
        employee_name: String,
        department: String,
        month: String,
        base_salary: Decimal,
        bonus: Decimal,
        bonus_description: Option<String>,
        deduction: Decimal,
        deduction_description: Option<String>,
    ) -> RepoResult<PayrollRecord> {
        let net_salary = base_salary + bonus - deduction;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE payroll SET
                    employee = $employee,
                    employeeName = $employee_name,
                    department = $department,
                    baseSalary = $base_salary,
                    bonus = $bonus,
                    bonusDescription = $bonus_description,
                    deduction = $deduction,
                    deductionDescription = $deduction_description,
                    netSalary = $net_salary,
                    status = 'Pending',
                    month = $month,
                    createdAt = $created_at
                RETURN AFTER"#,
            )
            .bind(("employee", employee))
            .bind(("employee_name", employee_name))
            .bind(("department", department))
            .bind(("base_salary", money(base_salary)))
            .bind(("bonus", money(bonus)))
            .bind(("bonus_description", bonus_description))
            .bind(("deduction", money(deduction)))
            .bind(("deduction_description", deduction_description))
            .bind(("net_salary", money(net_salary)))
            .bind(("month", month))
            .bind(("created_at", shared::util::now_millis()))
            .await?;

        let created: Option<PayrollRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create payroll record".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<PayrollRecord>> {
        let thing = self.base.parse_id(id, TABLE)?;
        let record: Option<PayrollRecord> = self.base.db().select(thing).await?;
        Ok(record)
    }

    /// Records owned by one employee, newest first
    pub async fn find_by_employee(&self, employee: RecordId) -> RepoResult<Vec<PayrollRecord>> {
        let records: Vec<PayrollRecord> = self
            .base
            .db()
            .query("SELECT * FROM payroll WHERE employee = $employee ORDER BY createdAt DESC")
            .bind(("employee", employee))
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Filtered aggregate view (month / name search / department)
    pub async fn find_filtered(&self, query: &PayrollQuery) -> RepoResult<Vec<PayrollRecord>> {
        let mut conditions: Vec<&str> = Vec::new();
        if query.month.is_some() {
            conditions.push("month = $month");
        }
        if query.search.is_some() {
            conditions.push("string::lowercase(employeeName) CONTAINS string::lowercase($search)");
        }
        if query.department.is_some() {
            conditions.push("department = $department");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", conditions.join(" AND "))
        };
        let sql = format!("SELECT * FROM payroll {}ORDER BY createdAt DESC", where_clause);

        let records: Vec<PayrollRecord> = self
            .base
            .db()
            .query(sql)
            .bind(("month", query.month.clone().unwrap_or_default()))
            .bind(("search", query.search.clone().unwrap_or_default()))
            .bind(("department", query.department.clone().unwrap_or_default()))
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Patch adjustable fields and recompute the derived net salary
    ///
    /// Merge happens in Rust; the write is still a single document update.
    pub async fn update(&self, id: &str, data: PayrollUpdate) -> RepoResult<PayrollRecord> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Payroll record {} not found", id)))?;
        let thing = self.base.parse_id(id, TABLE)?;

        let base_salary = data.base_salary.unwrap_or(existing.base_salary);
        let bonus = data.bonus.unwrap_or(existing.bonus);
        let deduction = data.deduction.unwrap_or(existing.deduction);
        let net_salary = base_salary + bonus - deduction;

        let bonus_description = data.bonus_description.or(existing.bonus_description);
        let deduction_description = data.deduction_description.or(existing.deduction_description);

        let status = match data.status.as_deref() {
            Some(raw) => PayrollStatus::parse(raw)
                .ok_or_else(|| RepoError::Validation(format!("Invalid payroll status: {raw}")))?,
            None => existing.status,
        };
        let month = data.month.unwrap_or(existing.month);

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    baseSalary = $base_salary,
                    bonus = $bonus,
                    bonusDescription = $bonus_description,
                    deduction = $deduction,
                    deductionDescription = $deduction_description,
                    netSalary = $net_salary,
                    status = $status,
                    month = $month
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("base_salary", money(base_salary)))
            .bind(("bonus", money(bonus)))
            .bind(("bonus_description", bonus_description))
            .bind(("deduction", money(deduction)))
            .bind(("deduction_description", deduction_description))
            .bind(("net_salary", money(net_salary)))
            .bind(("status", status))
            .bind(("month", month))
            .await?;

        result
            .take::<Option<PayrollRecord>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Payroll record {} not found", id)))
    }
}
