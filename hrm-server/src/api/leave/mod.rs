//! Leave Request Routes
//!
//! Single-record operations under `/leave`, plus the manager bulk surface
//! under `/manager/leave-requests` (gated to managers by the role gate).

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/leave", post(handler::create).get(handler::list))
        .route(
            "/leave/{id}",
            get(handler::get_by_id)
                .put(handler::decide)
                .delete(handler::delete),
        )
        .route(
            "/manager/leave-requests",
            get(handler::team_list).put(handler::bulk_decide),
        )
}
