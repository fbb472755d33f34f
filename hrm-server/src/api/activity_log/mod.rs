//! Activity Log Routes (HR tree)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/hr/activity-log", get(handler::query))
}
