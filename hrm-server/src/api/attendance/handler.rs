//! Attendance Handlers

use axum::{Extension, Json, extract::State};
use futures::future::join_all;
use surrealdb::RecordId;

use crate::activity::{ActivityAction, ActivityModule};
use crate::auth::{CurrentUser, Role};
use crate::core::ServerState;
use crate::db::models::{AttendanceRecord, AutoClockOutResponse, AutoClockOutResult};
use crate::db::repository::AttendanceRepository;
use crate::utils::{AppError, time};

fn caller_record_id(user: &CurrentUser) -> Result<RecordId, AppError> {
    user.id.parse().map_err(|_| AppError::invalid_token())
}

/// GET /employee/attendance — the caller's own history
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    user.require_role(&[Role::Employee])?;

    let repo = AttendanceRepository::new(state.get_db());
    let records = repo.find_by_employee(caller_record_id(&user)?).await?;
    Ok(Json(records))
}

/// POST /employee/attendance/clock-in — open today's record
pub async fn clock_in(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AttendanceRecord>, AppError> {
    user.require_role(&[Role::Employee])?;

    let repo = AttendanceRepository::new(state.get_db());
    let record = repo
        .clock_in(
            caller_record_id(&user)?,
            user.name.clone(),
            time::today_local(),
            shared::util::now_millis(),
        )
        .await?;

    state.activity.log(
        &user,
        ActivityAction::ClockIn,
        ActivityModule::Attendance,
        format!("clocked in on {}", record.date),
        None,
    );

    Ok(Json(record))
}

/// POST /employee/attendance/clock-out — close today's record
pub async fn clock_out(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AttendanceRecord>, AppError> {
    user.require_role(&[Role::Employee])?;

    let repo = AttendanceRepository::new(state.get_db());
    let record = repo
        .clock_out(
            caller_record_id(&user)?,
            time::today_local(),
            shared::util::now_millis(),
        )
        .await?;

    state.activity.log(
        &user,
        ActivityAction::ClockOut,
        ActivityModule::Attendance,
        format!("clocked out on {}", record.date),
        None,
    );

    Ok(Json(record))
}

/// POST /employee/attendance/auto-clock-out — batch job entry point
///
/// Closes every record dated today with a clock-in but no clock-out.
/// Records are processed concurrently; one record's failure is logged and
/// skipped without aborting the rest.
pub async fn auto_clock_out(
    State(state): State<ServerState>,
) -> Result<Json<AutoClockOutResponse>, AppError> {
    let repo = AttendanceRepository::new(state.get_db());
    let now = shared::util::now_millis();
    let open = repo.find_open_for_date(time::today_local()).await?;

    let results = join_all(open.iter().map(|record| {
        let repo = repo.clone();
        async move { repo.close_record(record, now, true).await }
    }))
    .await;

    let mut updated = Vec::new();
    let mut skipped = 0usize;
    for (record, result) in open.iter().zip(results) {
        match result {
            Ok(Some(closed)) => updated.push(AutoClockOutResult {
                employee_id: closed.employee.to_string(),
                employee_name: closed.employee_name,
                clock_out: now,
                hours_worked: closed.hours_worked.unwrap_or(0.0),
            }),
            Ok(None) => {
                // Closed concurrently between the scan and the update
                skipped += 1;
            }
            Err(e) => {
                tracing::warn!(
                    employee = %record.employee,
                    error = %e,
                    "Auto clock-out failed for record, skipping"
                );
                skipped += 1;
            }
        }
    }

    state.activity.log_anonymous(
        ActivityAction::AutoClockOut,
        ActivityModule::Attendance,
        format!("auto clock-out closed {} records ({} skipped)", updated.len(), skipped),
    );

    tracing::info!(
        closed = updated.len(),
        skipped = skipped,
        "Auto clock-out batch finished"
    );

    Ok(Json(AutoClockOutResponse { updated, skipped }))
}
