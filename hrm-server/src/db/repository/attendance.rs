//! Attendance Repository
//!
//! One record per employee per day (unique index). Clock-out — manual or
//! batch — is a conditional update guarded by `clockOut = NONE`, so a record
//! can only be closed once.

use chrono::NaiveDate;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::AttendanceRecord;
use crate::utils::time::hours_between;

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Open today's attendance record
    pub async fn clock_in(
        &self,
        employee: RecordId,
        employee_name: String,
        date: NaiveDate,
        now: i64,
    ) -> RepoResult<AttendanceRecord> {
        if self.find_for_day(employee.clone(), date).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Already clocked in today".to_string(),
            ));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE attendance SET
                    employee = $employee,
                    employeeName = $employee_name,
                    date = $date,
                    clockIn = $now,
                    clockOut = NONE,
                    autoClockOut = false,
                    hoursWorked = NONE
                RETURN AFTER"#,
            )
            .bind(("employee", employee))
            .bind(("employee_name", employee_name))
            .bind(("date", date))
            .bind(("now", now))
            .await?;

        let created: Option<AttendanceRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create attendance record".to_string()))
    }

    /// Close today's attendance record and derive hours worked
    pub async fn clock_out(
        &self,
        employee: RecordId,
        date: NaiveDate,
        now: i64,
    ) -> RepoResult<AttendanceRecord> {
        let record = self
            .find_for_day(employee, date)
            .await?
            .ok_or_else(|| RepoError::NotFound("No clock-in record for today".to_string()))?;

        if record.clock_out.is_some() {
            return Err(RepoError::Validation("Already clocked out".to_string()));
        }

        self.close_record(&record, now, false)
            .await?
            .ok_or_else(|| RepoError::Validation("Already clocked out".to_string()))
    }

    /// Close a specific record (batch path sets the autoClockOut marker)
    ///
    /// Returns `None` when the record was already closed by a concurrent
    /// writer — the `clockOut = NONE` guard re-checks inside the update.
    pub async fn close_record(
        &self,
        record: &AttendanceRecord,
        now: i64,
        auto: bool,
    ) -> RepoResult<Option<AttendanceRecord>> {
        let thing = record
            .id
            .clone()
            .ok_or_else(|| RepoError::Validation("Attendance record has no id".to_string()))?;
        let hours_worked = hours_between(record.clock_in, now);

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    clockOut = $now,
                    autoClockOut = $auto,
                    hoursWorked = $hours_worked
                WHERE clockOut = NONE
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("now", now))
            .bind(("auto", auto))
            .bind(("hours_worked", hours_worked))
            .await?;

        Ok(result.take::<Option<AttendanceRecord>>(0)?)
    }

    /// One employee's record for one day
    pub async fn find_for_day(
        &self,
        employee: RecordId,
        date: NaiveDate,
    ) -> RepoResult<Option<AttendanceRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE employee = $employee AND date = $date LIMIT 1")
            .bind(("employee", employee))
            .bind(("date", date))
            .await?;
        let records: Vec<AttendanceRecord> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// One employee's history, newest first
    pub async fn find_by_employee(&self, employee: RecordId) -> RepoResult<Vec<AttendanceRecord>> {
        let records: Vec<AttendanceRecord> = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE employee = $employee ORDER BY date DESC")
            .bind(("employee", employee))
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Every still-open record for a given day — the batch job's work list
    pub async fn find_open_for_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
        let records: Vec<AttendanceRecord> = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE date = $date AND clockOut = NONE")
            .bind(("date", date))
            .await?
            .take(0)?;
        Ok(records)
    }
}
