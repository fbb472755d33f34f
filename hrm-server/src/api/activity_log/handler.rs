//! Activity Log Handlers

use axum::{
    Extension, Json,
    extract::{Query, State},
};

use crate::activity::{ActivityListResponse, ActivityQuery};
use crate::auth::{CurrentUser, Role};
use crate::core::ServerState;
use crate::utils::AppError;

/// GET /hr/activity-log — HR-only query over the append-only trail
pub async fn query(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityListResponse>, AppError> {
    user.require_role(&[Role::Hr])?;

    let (items, total) = state
        .activity
        .query(&query)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(ActivityListResponse { items, total }))
}
