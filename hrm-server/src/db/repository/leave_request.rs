//! Leave Request Repository
//!
//! The approval transition is one conditional update: status, approver and
//! approval timestamp move together, guarded by `status = 'Pending'`. A
//! request that is already resolved matches nothing and the caller sees
//! not-found — a record can never be re-approved with a different approver.

use chrono::NaiveDate;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{LeaveRequest, LeaveStatus};

const TABLE: &str = "leave_request";

#[derive(Clone)]
pub struct LeaveRequestRepository {
    base: BaseRepository,
}

impl LeaveRequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new pending request
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        employee: RecordId,
        employee_name: String,
        leave_type: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
    ) -> RepoResult<LeaveRequest> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE leave_request SET
                    employee = $employee,
                    employeeName = $employee_name,
                    leaveType = $leave_type,
                    startDate = $start_date,
                    endDate = $end_date,
                    reason = $reason,
                    status = 'Pending',
                    approvedBy = NONE,
                    approvalDate = NONE,
                    createdAt = $created_at
                RETURN AFTER"#,
            )
            .bind(("employee", employee))
            .bind(("employee_name", employee_name))
            .bind(("leave_type", leave_type))
            .bind(("start_date", start_date))
            .bind(("end_date", end_date))
            .bind(("reason", reason))
            .bind(("created_at", shared::util::now_millis()))
            .await?;

        let created: Option<LeaveRequest> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create leave request".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<LeaveRequest>> {
        let thing = self.base.parse_id(id, TABLE)?;
        let request: Option<LeaveRequest> = self.base.db().select(thing).await?;
        Ok(request)
    }

    /// All requests owned by one employee, newest first
    pub async fn find_by_employee(&self, employee: RecordId) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query("SELECT * FROM leave_request WHERE employee = $employee ORDER BY createdAt DESC")
            .bind(("employee", employee))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// All requests, newest first (HR view)
    pub async fn find_all(&self) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query("SELECT * FROM leave_request ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Requests owned by any of the given employees (a manager's team view)
    pub async fn find_for_team(&self, team: Vec<RecordId>) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query("SELECT * FROM leave_request WHERE employee IN $team ORDER BY createdAt DESC")
            .bind(("team", team))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Resolve a pending request — Pending → Approved | Rejected
    ///
    /// Returns `None` when the request does not exist or is no longer
    /// Pending (a second resolution attempt lands here).
    pub async fn resolve(
        &self,
        id: &str,
        status: LeaveStatus,
        approver: RecordId,
        approval_date: i64,
    ) -> RepoResult<Option<LeaveRequest>> {
        let thing = self.base.parse_id(id, TABLE)?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    status = $status,
                    approvedBy = $approver,
                    approvalDate = $approval_date
                WHERE status = 'Pending'
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("approver", approver))
            .bind(("approval_date", approval_date))
            .await?;

        Ok(result.take::<Option<LeaveRequest>>(0)?)
    }

    /// Delete a request if it is still Pending; ownership is checked by the
    /// caller before this runs. Returns false when nothing matched.
    pub async fn delete_if_pending(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, TABLE)?;

        let mut result = self
            .base
            .db()
            .query("DELETE $thing WHERE status = 'Pending' RETURN BEFORE")
            .bind(("thing", thing))
            .await?;

        let deleted: Option<LeaveRequest> = result.take(0)?;
        Ok(deleted.is_some())
    }
}
