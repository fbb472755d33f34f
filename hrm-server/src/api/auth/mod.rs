//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Build authentication router
/// - /auth/login, /auth/register/{role}: public (skipped by the auth middleware)
/// - /auth/me, /auth/logout: protected by the global require_auth middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/auth/login", post(handler::login))
        .route("/auth/register/{role}", post(handler::register))
        .route("/auth/me", get(handler::me))
        .route("/auth/logout", post(handler::logout))
}
