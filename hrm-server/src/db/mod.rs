//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend). The schema — tables plus the two
//! unique indexes the invariants depend on — is defined exactly once at
//! process startup; there are no runtime existence checks.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and define the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("hrm")
            .use_db("hrm")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        let service = Self { db };
        service.define_schema().await?;

        tracing::info!("Database ready (embedded SurrealDB at {db_path})");
        Ok(service)
    }

    /// One-time schema definition at startup
    ///
    /// - `uniq_account_email`: email unique across every role variant
    /// - `uniq_attendance_day`: one attendance record per employee per day
    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query(
                r#"
                DEFINE TABLE IF NOT EXISTS account SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS uniq_account_email ON TABLE account COLUMNS email UNIQUE;
                DEFINE TABLE IF NOT EXISTS leave_request SCHEMALESS;
                DEFINE TABLE IF NOT EXISTS payroll SCHEMALESS;
                DEFINE TABLE IF NOT EXISTS announcement SCHEMALESS;
                DEFINE TABLE IF NOT EXISTS attendance SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS uniq_attendance_day ON TABLE attendance COLUMNS employee, date UNIQUE;
                DEFINE TABLE IF NOT EXISTS activity_log SCHEMALESS;
                "#,
            )
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        Ok(())
    }
}
