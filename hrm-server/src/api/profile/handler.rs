//! Profile Handlers

use axum::{Extension, Json, extract::Multipart, extract::State};

use crate::activity::{ActivityAction, ActivityModule};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::ProfileUpdate;
use crate::db::repository::AccountRepository;
use crate::utils::AppError;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_optional_text};
use shared::client::UserInfo;

/// GET /{role}/profile — the caller's own account, hash excluded
pub async fn get_profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserInfo>, AppError> {
    let repo = AccountRepository::new(state.get_db());
    let account = repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Account not found"))?;
    Ok(Json(UserInfo::from(account)))
}

/// PATCH /{role}/profile — multipart form with `phone`, `emergencyContact`
/// and an optional `profilePicture` file
///
/// Upload persistence is stubbed: the picture part is drained and only its
/// filename is recorded on the account.
pub async fn update_profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<Json<UserInfo>, AppError> {
    let mut update = ProfileUpdate::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("phone") => {
                update.phone = Some(field.text().await?);
            }
            Some("emergencyContact") => {
                update.emergency_contact = Some(field.text().await?);
            }
            Some("profilePicture") => {
                let filename = field.file_name().map(|s| s.to_string());
                // Drain the upload; persistence is out of scope.
                let _ = field.bytes().await?;
                if let Some(filename) = filename {
                    update.profile_picture = Some(filename);
                }
            }
            _ => {
                // Unknown parts are ignored, matching lenient form handling
                let _ = field.bytes().await?;
            }
        }
    }

    validate_optional_text(&update.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&update.emergency_contact, "emergencyContact", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&update.profile_picture, "profilePicture", MAX_SHORT_TEXT_LEN)?;

    let repo = AccountRepository::new(state.get_db());
    let account = repo.update_profile(&user.id, update).await?;

    state.activity.log(
        &user,
        ActivityAction::Update,
        ActivityModule::Profile,
        "updated own profile",
        None,
    );

    Ok(Json(UserInfo::from(account)))
}
