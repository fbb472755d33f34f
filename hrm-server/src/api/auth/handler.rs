//! Authentication Handlers
//!
//! Login, registration, logout and current-account lookup.

use std::time::Duration;

use axum::{Extension, Json, extract::Path, extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration as TimeDuration;

use crate::activity::{ActivityAction, ActivityModule};
use crate::auth::{CurrentUser, ROLE_COOKIE, Role, TOKEN_COOKIE};
use crate::core::ServerState;
use crate::db::models::{AccountCreate, EmploymentStatus};
use crate::db::repository::AccountRepository;
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, require_field,
    validate_email, validate_optional_text, validate_required_text,
};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn session_cookie(name: &'static str, value: String, ttl_minutes: i64) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(ttl_minutes))
        .build()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, "")).path("/").build()
}

/// Login handler
///
/// Resolves the identity by email across all role variants, verifies the
/// password and issues the session: `{token, role}` in the body plus the
/// two HTTP-only cookies. The cookies are built only after the token mint
/// succeeds, so either both are set or neither is.
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let email = require_field(req.email, "email")?;
    let password = require_field(req.password, "password")?;
    validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&password, "password", MAX_PASSWORD_LEN)?;

    let repo = AccountRepository::new(state.get_db());
    let account = repo.find_by_email(&email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified failure message to prevent account enumeration
    let account = match account {
        Some(account) => {
            let password_valid = account
                .verify_password(&password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                state.activity.log_anonymous(
                    ActivityAction::LoginFailed,
                    ActivityModule::Auth,
                    format!("invalid credentials for {}", email),
                );
                tracing::warn!(email = %email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            account
        }
        None => {
            state.activity.log_anonymous(
                ActivityAction::LoginFailed,
                ActivityModule::Auth,
                format!("unknown email {}", email),
            );
            tracing::warn!(email = %email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    if account.status == EmploymentStatus::Terminated {
        return Err(AppError::forbidden("Account has been terminated"));
    }

    let account_id = account.id_string();
    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(
            &account_id,
            &account.email,
            &account.name,
            account.role,
            &account.department,
            &account.permissions,
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    let role = account.role;
    let ttl = jwt_service.config.expiration_minutes;
    let jar = jar
        .add(session_cookie(TOKEN_COOKIE, token.clone(), ttl))
        .add(session_cookie(ROLE_COOKIE, role.as_str().to_string(), ttl));

    let user = CurrentUser {
        id: account_id.clone(),
        email: account.email.clone(),
        name: account.name.clone(),
        role,
        department: account.department.clone(),
        permissions: account.permissions.clone(),
    };
    state.activity.log(
        &user,
        ActivityAction::Login,
        ActivityModule::Auth,
        format!("login {}", account.email),
        None,
    );

    tracing::info!(
        account_id = %account_id,
        email = %account.email,
        role = %role,
        "User logged in successfully"
    );

    let response = LoginResponse {
        token,
        role: role.as_str().to_string(),
        user: UserInfo::from(account),
    };

    Ok((jar, Json(response)))
}

/// Registration handler (`POST /auth/register/{hr|manager|employee}`)
///
/// The path segment picks the role variant ("admin" is accepted as an alias
/// for the hr role). Responds 201 on success, 400 when the email is taken
/// by any account.
pub async fn register(
    State(state): State<ServerState>,
    Path(role): Path<String>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserInfo>), AppError> {
    let role = match role.as_str() {
        "admin" | "hr" => Role::Hr,
        "manager" => Role::Manager,
        "employee" => Role::Employee,
        other => {
            return Err(AppError::validation(format!(
                "Unknown registration role: {other}"
            )));
        }
    };

    let name = require_field(req.name, "name")?;
    let email = require_field(req.email, "email")?;
    let password = require_field(req.password, "password")?;
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_email(&email)?;
    validate_required_text(&password, "password", MAX_PASSWORD_LEN)?;
    validate_optional_text(&req.department, "department", MAX_NAME_LEN)?;
    validate_optional_text(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    // Only managers own a team; ids are validated up front
    let team = if role == Role::Manager {
        let mut team = Vec::with_capacity(req.team.len());
        for raw in &req.team {
            let id: surrealdb::RecordId = raw
                .parse()
                .map_err(|_| AppError::validation(format!("Invalid team member id: {raw}")))?;
            if id.table() != "account" {
                return Err(AppError::validation(format!(
                    "Invalid team member id: {raw}"
                )));
            }
            team.push(id);
        }
        team
    } else {
        vec![]
    };

    let permissions = if role == Role::Hr {
        vec!["all".to_string()]
    } else {
        vec![]
    };

    let repo = AccountRepository::new(state.get_db());
    let account = repo
        .create(AccountCreate {
            name,
            email,
            password,
            role,
            department: req.department.unwrap_or_default(),
            phone: req.phone,
            team,
            permissions,
        })
        .await?;

    state.activity.log_anonymous(
        ActivityAction::Register,
        ActivityModule::Auth,
        format!("registered {} as {}", account.email, role),
    );

    tracing::info!(email = %account.email, role = %role, "Account registered");

    Ok((StatusCode::CREATED, Json(UserInfo::from(account))))
}

/// Get current account info
pub async fn me(
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

/// Logout handler — clears both session cookies
pub async fn logout(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<()>), AppError> {
    state.activity.log(
        &user,
        ActivityAction::Logout,
        ActivityModule::Auth,
        format!("logout {}", user.email),
        None,
    );

    tracing::info!(account_id = %user.id, email = %user.email, "User logged out");

    let jar = jar
        .remove(removal_cookie(TOKEN_COOKIE))
        .remove(removal_cookie(ROLE_COOKIE));
    Ok((jar, Json(())))
}
