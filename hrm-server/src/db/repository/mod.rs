//! Repository Module
//!
//! Single-document CRUD over the embedded SurrealDB store. Every mutation is
//! one statement; the store's document-level atomicity is the only
//! synchronization in the system.

pub mod account;
pub mod announcement;
pub mod attendance;
pub mod leave_request;
pub mod payroll;

pub use account::AccountRepository;
pub use announcement::AnnouncementRepository;
pub use attendance::AttendanceRepository;
pub use leave_request::LeaveRequestRepository;
pub use payroll::PayrollRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            // Duplicates (email taken, double clock-in) surface as 400
            RepoError::Duplicate(msg) => AppError::Validation(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings end to end
// =============================================================================
//
// surrealdb::RecordId handles all IDs:
//   - parse:   let id: RecordId = "account:abc".parse()?;
//   - table:   id.table()
//   - key:     id.key().to_string()
//   - CRUD:    db.select(id) / db.delete(id) take a RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Parse a "table:id" string, rejecting ids from other tables
    pub fn parse_id(&self, id: &str, table: &str) -> RepoResult<surrealdb::RecordId> {
        let record_id: surrealdb::RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if record_id.table() != table {
            return Err(RepoError::Validation(format!("Invalid {} ID: {}", table, id)));
        }
        Ok(record_id)
    }
}
