//! Activity log storage
//!
//! Appends and queries against the `activity_log` table. Only the worker
//! appends; handlers and middleware go through the queue in
//! [`super::service::ActivityService`].

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use super::types::{ActivityEntry, ActivityQuery};

#[derive(Debug, Error)]
pub enum ActivityStorageError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for ActivityStorageError {
    fn from(err: surrealdb::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[derive(Clone)]
pub struct ActivityStorage {
    db: Surreal<Db>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

impl ActivityStorage {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Append one entry
    pub async fn append(&self, entry: ActivityEntry) -> Result<ActivityEntry, ActivityStorageError> {
        let mut result = self
            .db
            .query(
                r#"CREATE activity_log SET
                    actorId = $actor_id,
                    actorName = $actor_name,
                    role = $role,
                    action = $action,
                    module = $module,
                    details = $details,
                    ip = $ip,
                    timestamp = $timestamp
                RETURN AFTER"#,
            )
            .bind(("actor_id", entry.actor_id))
            .bind(("actor_name", entry.actor_name))
            .bind(("role", entry.role))
            .bind(("action", entry.action))
            .bind(("module", entry.module))
            .bind(("details", entry.details))
            .bind(("ip", entry.ip))
            .bind(("timestamp", entry.timestamp))
            .await?;

        let created: Option<ActivityEntry> = result.take(0)?;
        created.ok_or_else(|| ActivityStorageError::Database("Failed to append entry".to_string()))
    }

    /// Query entries, newest first, with a total count for pagination
    pub async fn query(
        &self,
        q: &ActivityQuery,
    ) -> Result<(Vec<ActivityEntry>, u64), ActivityStorageError> {
        let mut conditions: Vec<&str> = Vec::new();
        if q.from.is_some() {
            conditions.push("timestamp >= $from");
        }
        if q.to.is_some() {
            conditions.push("timestamp <= $to");
        }
        if q.module.is_some() {
            conditions.push("module = $module");
        }
        if q.actor_id.is_some() {
            conditions.push("actorId = $actor_id");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", conditions.join(" AND "))
        };
        let sql = format!(
            "SELECT * FROM activity_log {}ORDER BY timestamp DESC LIMIT {} START {}; \
             SELECT count() AS count FROM activity_log {}GROUP ALL;",
            where_clause, q.limit, q.offset, where_clause
        );

        let mut result = self
            .db
            .query(sql)
            .bind(("from", q.from.unwrap_or(0)))
            .bind(("to", q.to.unwrap_or(i64::MAX)))
            .bind(("module", q.module))
            .bind(("actor_id", q.actor_id.clone().unwrap_or_default()))
            .await?;

        let items: Vec<ActivityEntry> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        Ok((items, total))
    }
}
