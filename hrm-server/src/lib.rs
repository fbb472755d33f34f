//! HRM Server — role-based human resources management backend
//!
//! # Architecture overview
//!
//! - **Authentication** (`auth`): JWT sessions (cookie + bearer), closed
//!   role model, role-routing middleware
//! - **Database** (`db`): embedded SurrealDB document store
//! - **HTTP API** (`api`): per-resource routers and handlers
//! - **Activity log** (`activity`): append-only audit trail behind a
//!   background worker queue
//!
//! # Module structure
//!
//! ```text
//! hrm-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT sessions, roles, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! ├── activity/      # activity log service + worker
//! └── utils/         # errors, logging, validation, dates
//! ```

pub mod activity;
pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService, Role};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing field syntax
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, prepare the working directory and initialize logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.to_str(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   __  ______  __  ___
  / / / / __ \/  |/  /
 / /_/ / /_/ / /|_/ /
/ __  / _, _/ /  / /
/_/ /_/_/ |_/_/  /_/  server
    "#
    );
}
