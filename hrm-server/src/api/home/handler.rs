//! Role home handlers

use axum::{Extension, Json};
use serde::Serialize;

use crate::auth::{CurrentUser, Role};

/// Role dashboard payload
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub role: String,
    pub name: String,
    pub email: String,
    pub department: String,
    /// Modules this role's tree exposes
    pub modules: Vec<&'static str>,
}

/// Role root page — the landing target of cross-role redirects
///
/// The role gate guarantees the caller's role matches the tree, so one
/// handler serves all three roots.
pub async fn home(Extension(user): Extension<CurrentUser>) -> Json<Dashboard> {
    let modules = match user.role {
        Role::Hr => vec![
            "employees",
            "leave",
            "payroll",
            "announcements",
            "activity-log",
        ],
        Role::Manager => vec!["team", "leave-requests", "announcements"],
        Role::Employee => vec!["profile", "leave", "attendance", "announcements"],
    };

    Json(Dashboard {
        role: user.role.as_str().to_string(),
        name: user.name,
        email: user.email,
        department: user.department,
        modules,
    })
}
