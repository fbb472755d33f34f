//! Authentication module
//!
//! JWT session tokens, the current-user context, the closed role model and
//! the middleware that enforces both.

pub mod jwt;
pub mod middleware;
pub mod role;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{AUTO_CLOCK_OUT_PATH, ROLE_COOKIE, TOKEN_COOKIE, require_auth, role_gate};
pub use role::Role;
