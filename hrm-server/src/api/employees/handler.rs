//! Employee Directory Handlers

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityAction, ActivityModule};
use crate::auth::{CurrentUser, Role};
use crate::core::ServerState;
use crate::db::models::EmploymentStatus;
use crate::db::repository::AccountRepository;
use crate::utils::AppError;
use crate::utils::validation::require_field;
use shared::client::UserInfo;

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    pub id: Option<String>,
}

/// Single account or the whole directory, depending on the `id` filter
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DirectoryResponse {
    One(Box<UserInfo>),
    Many(Vec<UserInfo>),
}

/// GET /employee/profile/all?id=<id>
///
/// With `id`: a single lookup — always allowed for the caller's own id,
/// otherwise hr/manager only. Without `id`: the full employee directory for
/// hr and managers. Manager access is deliberately all-employees rather
/// than direct reports only; the broader visibility is a policy choice,
/// not an oversight.
pub async fn directory(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<DirectoryResponse>, AppError> {
    let repo = AccountRepository::new(state.get_db());

    if let Some(id) = query.id {
        if user.role == Role::Employee && user.id != id {
            return Err(AppError::forbidden(
                "Employees may only look up their own record",
            ));
        }
        let account = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
        return Ok(Json(DirectoryResponse::One(Box::new(UserInfo::from(
            account,
        )))));
    }

    user.require_role(&[Role::Hr, Role::Manager])?;
    let employees = repo.find_all_employees().await?;
    Ok(Json(DirectoryResponse::Many(
        employees.into_iter().map(UserInfo::from).collect(),
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub employee_id: Option<String>,
    pub status: Option<String>,
}

/// PUT /employee/status — `{employeeId, status}`, manager/hr only
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<UserInfo>, AppError> {
    user.require_role(&[Role::Manager, Role::Hr])?;

    let employee_id = require_field(payload.employee_id, "employeeId")?;
    let raw_status = require_field(payload.status, "status")?;
    let status = EmploymentStatus::parse(&raw_status)
        .ok_or_else(|| AppError::validation(format!("Invalid status: {raw_status}")))?;

    let repo = AccountRepository::new(state.get_db());
    let account = repo.update_status(&employee_id, status).await?;

    state.activity.log(
        &user,
        ActivityAction::Update,
        ActivityModule::Employees,
        format!("set {} status to {}", employee_id, status.as_str()),
        None,
    );

    Ok(Json(UserInfo::from(account)))
}
