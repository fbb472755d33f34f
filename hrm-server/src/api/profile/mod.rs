//! Profile Routes
//!
//! Self-service profile, one path per role tree so the role gate covers
//! navigation; all three paths share the same handlers.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/hr/profile",
            get(handler::get_profile).patch(handler::update_profile),
        )
        .route(
            "/manager/profile",
            get(handler::get_profile).patch(handler::update_profile),
        )
        .route(
            "/employee/profile",
            get(handler::get_profile).patch(handler::update_profile),
        )
}
