//! Attendance Routes
//!
//! Self-service clock-in/out under the employee tree, plus the batch
//! auto-clock-out entry point invoked by an external scheduler (public —
//! skipped by both middleware layers).

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employee/attendance", get(handler::list))
        .route("/employee/attendance/clock-in", post(handler::clock_in))
        .route("/employee/attendance/clock-out", post(handler::clock_out))
        .route(
            "/employee/attendance/auto-clock-out",
            post(handler::auto_clock_out),
        )
}
