//! Payroll Routes

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/payroll",
        get(handler::list)
            .post(handler::create)
            .patch(handler::update),
    )
}
