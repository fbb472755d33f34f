//! Employee Directory Routes
//!
//! These live under the `/employee` prefix for contract compatibility but
//! are data endpoints with their own allow-lists — the role gate skips
//! them (see `auth::middleware::UNGATED_DATA_PATHS`).

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employee/profile/all", get(handler::directory))
        .route("/employee/status", put(handler::update_status))
}
