//! Leave Request Handlers
//!
//! State machine: Pending → Approved | Rejected (terminal). Managers may
//! only resolve requests from employees on their team; the membership check
//! compares typed record ids. HR resolves any request.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use surrealdb::RecordId;

use crate::activity::{ActivityAction, ActivityModule};
use crate::auth::{CurrentUser, Role};
use crate::core::ServerState;
use crate::db::models::{
    BulkLeaveDecision, BulkLeaveOutcome, LeaveCreate, LeaveDecision, LeaveRequest, LeaveStatus,
};
use crate::db::repository::{AccountRepository, LeaveRequestRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, require_field, validate_required_text,
};
use crate::utils::{AppError, time};

fn caller_record_id(user: &CurrentUser) -> Result<RecordId, AppError> {
    user.id.parse().map_err(|_| AppError::invalid_token())
}

/// POST /leave — employee submits a request; status starts Pending
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<LeaveCreate>,
) -> Result<(StatusCode, Json<LeaveRequest>), AppError> {
    user.require_role(&[Role::Employee])?;

    let leave_type = require_field(payload.leave_type, "leaveType")?;
    let start_raw = require_field(payload.start_date, "startDate")?;
    let end_raw = require_field(payload.end_date, "endDate")?;
    let reason = require_field(payload.reason, "reason")?;

    validate_required_text(&leave_type, "leaveType", MAX_NAME_LEN)?;
    validate_required_text(&reason, "reason", MAX_NOTE_LEN)?;
    let start_date = time::parse_date(&start_raw)?;
    let end_date = time::parse_date(&end_raw)?;
    time::validate_date_range(start_date, end_date)?;

    let repo = LeaveRequestRepository::new(state.get_db());
    let request = repo
        .create(
            caller_record_id(&user)?,
            user.name.clone(),
            leave_type,
            start_date,
            end_date,
            reason,
        )
        .await?;

    state.activity.log(
        &user,
        ActivityAction::Create,
        ActivityModule::Leave,
        format!("submitted leave request {}", request_id_string(&request)),
        None,
    );

    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /leave — role-scoped list: own requests, team requests, or all
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let repo = LeaveRequestRepository::new(state.get_db());

    let requests = match user.role {
        Role::Employee => repo.find_by_employee(caller_record_id(&user)?).await?,
        Role::Manager => {
            let team = AccountRepository::new(state.get_db())
                .team_of(&user.id)
                .await?;
            repo.find_for_team(team).await?
        }
        Role::Hr => repo.find_all().await?,
    };

    Ok(Json(requests))
}

/// GET /leave/{id} — owner, a manager whose team includes the owner, or HR
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<LeaveRequest>, AppError> {
    let repo = LeaveRequestRepository::new(state.get_db());
    let request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {} not found", id)))?;

    let allowed = match user.role {
        Role::Hr => true,
        Role::Employee => request.employee == caller_record_id(&user)?,
        Role::Manager => {
            let team = AccountRepository::new(state.get_db())
                .team_of(&user.id)
                .await?;
            team.contains(&request.employee)
        }
    };
    if !allowed {
        return Err(AppError::forbidden(
            "Not authorized to view this leave request",
        ));
    }

    Ok(Json(request))
}

/// PUT /leave/{id} — approver resolves a pending request
///
/// Status, approver and approval timestamp are written together in one
/// conditional update; a second attempt finds no Pending document and
/// surfaces 404 instead of silently re-approving.
pub async fn decide(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<LeaveDecision>,
) -> Result<Json<LeaveRequest>, AppError> {
    user.require_role(&[Role::Manager, Role::Hr])?;

    let raw_status = require_field(payload.status, "status")?;
    let status = LeaveStatus::parse_decision(&raw_status)
        .ok_or_else(|| AppError::validation(format!("Invalid decision status: {raw_status}")))?;

    let repo = LeaveRequestRepository::new(state.get_db());
    let request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {} not found", id)))?;

    if user.role == Role::Manager {
        let team = AccountRepository::new(state.get_db())
            .team_of(&user.id)
            .await?;
        if !team.contains(&request.employee) {
            return Err(AppError::forbidden(
                "Not authorized to approve requests for this employee",
            ));
        }
    }

    let resolved = repo
        .resolve(
            &id,
            status,
            caller_record_id(&user)?,
            shared::util::now_millis(),
        )
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Leave request {} not found or already resolved", id))
        })?;

    let action = match status {
        LeaveStatus::Approved => ActivityAction::Approve,
        _ => ActivityAction::Reject,
    };
    state.activity.log(
        &user,
        action,
        ActivityModule::Leave,
        format!("{} leave request {}", status.as_str(), id),
        None,
    );

    Ok(Json(resolved))
}

/// DELETE /leave/{id} — owner only, Pending only
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<bool>, AppError> {
    let repo = LeaveRequestRepository::new(state.get_db());
    let request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {} not found", id)))?;

    if user.role != Role::Employee || request.employee != caller_record_id(&user)? {
        return Err(AppError::forbidden(
            "Only the owning employee may delete a leave request",
        ));
    }
    if request.status != LeaveStatus::Pending {
        return Err(AppError::forbidden("Only pending requests can be deleted"));
    }

    let deleted = repo.delete_if_pending(&id).await?;
    if !deleted {
        // Resolved between the read and the delete
        return Err(AppError::not_found(format!(
            "Leave request {} not found or already resolved",
            id
        )));
    }

    state.activity.log(
        &user,
        ActivityAction::Delete,
        ActivityModule::Leave,
        format!("deleted leave request {}", id),
        None,
    );

    Ok(Json(true))
}

/// GET /manager/leave-requests — the caller's team requests
pub async fn team_list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    user.require_role(&[Role::Manager])?;

    let team = AccountRepository::new(state.get_db())
        .team_of(&user.id)
        .await?;
    let requests = LeaveRequestRepository::new(state.get_db())
        .find_for_team(team)
        .await?;
    Ok(Json(requests))
}

/// PUT /manager/leave-requests — bulk resolution with per-item isolation
///
/// The same team-membership guard as the single-record path applies to
/// every id; items that fail it (or are already resolved) land in
/// `skipped` without aborting the rest.
pub async fn bulk_decide(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<BulkLeaveDecision>,
) -> Result<Json<BulkLeaveOutcome>, AppError> {
    user.require_role(&[Role::Manager])?;

    let raw_status = require_field(payload.status, "status")?;
    let status = LeaveStatus::parse_decision(&raw_status)
        .ok_or_else(|| AppError::validation(format!("Invalid decision status: {raw_status}")))?;
    if payload.request_ids.is_empty() {
        return Err(AppError::validation("requestIds must not be empty"));
    }

    let approver = caller_record_id(&user)?;
    let team = AccountRepository::new(state.get_db())
        .team_of(&user.id)
        .await?;
    let repo = LeaveRequestRepository::new(state.get_db());

    let mut updated = Vec::new();
    let mut skipped = Vec::new();

    for id in &payload.request_ids {
        let outcome = async {
            let request = repo.find_by_id(id).await?;
            let Some(request) = request else {
                return Ok::<Option<LeaveRequest>, AppError>(None);
            };
            if !team.contains(&request.employee) {
                return Ok(None);
            }
            repo.resolve(id, status, approver.clone(), shared::util::now_millis())
                .await
                .map_err(AppError::from)
        }
        .await;

        match outcome {
            Ok(Some(request)) => updated.push(request),
            Ok(None) => skipped.push(id.clone()),
            Err(e) => {
                tracing::warn!(request_id = %id, error = %e, "Bulk decision item failed");
                skipped.push(id.clone());
            }
        }
    }

    let action = match status {
        LeaveStatus::Approved => ActivityAction::Approve,
        _ => ActivityAction::Reject,
    };
    state.activity.log(
        &user,
        action,
        ActivityModule::Leave,
        format!(
            "bulk {} {} requests ({} skipped)",
            status.as_str(),
            updated.len(),
            skipped.len()
        ),
        None,
    );

    Ok(Json(BulkLeaveOutcome { updated, skipped }))
}

fn request_id_string(request: &LeaveRequest) -> String {
    request
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default()
}
