//! Announcement Handlers

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::activity::{ActivityAction, ActivityModule};
use crate::auth::{CurrentUser, Role};
use crate::core::ServerState;
use crate::db::models::{Announcement, AnnouncementCreate, Urgency};
use crate::db::repository::AnnouncementRepository;
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, require_field, validate_required_text,
};

/// GET /announcements — any authenticated role
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Announcement>>, AppError> {
    let repo = AnnouncementRepository::new(state.get_db());
    let announcements = repo.find_all().await?;
    Ok(Json(announcements))
}

/// POST /announcements — HR publishes; announcements are immutable after this
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<AnnouncementCreate>,
) -> Result<(StatusCode, Json<Announcement>), AppError> {
    user.require_role(&[Role::Hr])?;

    let title = require_field(payload.title, "title")?;
    let content = require_field(payload.content, "content")?;
    validate_required_text(&title, "title", MAX_NAME_LEN)?;
    validate_required_text(&content, "content", MAX_NOTE_LEN)?;
    let category = payload.category.unwrap_or_else(|| "general".to_string());
    let urgency = match payload.urgency.as_deref() {
        Some(raw) => Urgency::parse(raw)
            .ok_or_else(|| AppError::validation(format!("Invalid urgency: {raw}")))?,
        None => Urgency::default(),
    };

    let author = user.id.parse().map_err(|_| AppError::invalid_token())?;
    let repo = AnnouncementRepository::new(state.get_db());
    let announcement = repo
        .create(title, content, author, user.name.clone(), category, urgency)
        .await?;

    state.activity.log(
        &user,
        ActivityAction::Create,
        ActivityModule::Announcements,
        format!("published announcement '{}'", announcement.title),
        None,
    );

    Ok((StatusCode::CREATED, Json(announcement)))
}
