//! Authentication and role-routing middleware
//!
//! Two layers run in front of every handler:
//!
//! 1. [`require_auth`] — validates the session token (cookie or bearer
//!    header) and injects [`CurrentUser`] into request extensions.
//! 2. [`role_gate`] — gates the role-scoped page trees (`/hr/*`,
//!    `/manager/*`, `/employee/*`). Cross-role navigation is not an error:
//!    the caller is redirected to their own role root.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{CurrentUser, JwtService, Role};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Signed session token cookie (HTTP-only)
pub const TOKEN_COOKIE: &str = "token";

/// Plaintext role marker cookie (HTTP-only)
pub const ROLE_COOKIE: &str = "role";

/// Batch entry point invoked by an external scheduler — no session attached
pub const AUTO_CLOCK_OUT_PATH: &str = "/employee/attendance/auto-clock-out";

/// Data endpoints that live under a role prefix but carry cross-role
/// allow-lists of their own (HR/manager aggregates). The navigation gate
/// must not bounce those callers; the handlers authorize them.
const UNGATED_DATA_PATHS: &[&str] = &["/employee/profile/all", "/employee/status"];

fn is_public_path(path: &str) -> bool {
    path == "/health"
        || path == "/auth/login"
        || path.starts_with("/auth/register/")
        || path == AUTO_CLOCK_OUT_PATH
}

/// Authentication middleware — requires a logged-in session
///
/// Reads the session token from the `token` cookie, falling back to an
/// `Authorization: Bearer <token>` header. On success [`CurrentUser`] is
/// inserted into request extensions (`req.extensions_mut().insert(user)`).
///
/// # Skipped paths
///
/// - `OPTIONS *` (CORS preflight)
/// - `/health`, `/auth/login`, `/auth/register/*`
/// - the auto-clock-out batch entry point
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if is_public_path(path) {
        return Ok(next.run(req).await);
    }

    let jar = CookieJar::from_headers(req.headers());
    let token = match jar.get(TOKEN_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            let bearer = req
                .headers()
                .get(http::header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(JwtService::extract_from_header);
            match bearer {
                Some(token) => token.to_string(),
                None => {
                    security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
                    return Err(AppError::unauthorized());
                }
            }
        }
    };

    let jwt_service = state.get_jwt_service();
    match jwt_service.validate_token(&token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims).map_err(|_| AppError::invalid_token())?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token()),
            }
        }
    }
}

/// Role-routing middleware — gates the role-scoped page trees
///
/// The caller's role (decoded from the session) is compared against the
/// tree the request targets. A mismatch is silently redirected to the
/// caller's own role root; HR hitting manager/employee trees is bounced to
/// `/hr` like everyone else. Each permitted page load hands a best-effort
/// `view` entry to the activity queue — the entry's fate never affects the
/// request.
pub async fn role_gate(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    // Externally scheduled; carries no session to gate on.
    if path == AUTO_CLOCK_OUT_PATH {
        return Ok(next.run(req).await);
    }

    if UNGATED_DATA_PATHS.contains(&path.as_str()) {
        return Ok(next.run(req).await);
    }

    let Some(scope) = Role::path_scope(&path) else {
        return Ok(next.run(req).await);
    };

    let user = req
        .extensions()
        .get::<CurrentUser>()
        .cloned()
        .ok_or(AppError::unauthorized())?;

    if user.role != scope {
        security_log!(
            "INFO",
            "cross_role_redirect",
            user_id = user.id.clone(),
            user_role = user.role.as_str(),
            requested_path = path.clone()
        );
        return Ok(Redirect::temporary(user.role.home_path()).into_response());
    }

    let source_ip = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string());
    state.activity.log_page_view(&user, &path, source_ip);

    Ok(next.run(req).await)
}
