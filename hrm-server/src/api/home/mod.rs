//! Role home routes
//!
//! Each role tree has a root page — the target of the cross-role redirect.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/hr", get(handler::home))
        .route("/manager", get(handler::home))
        .route("/employee", get(handler::home))
}
