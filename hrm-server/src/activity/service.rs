//! Activity log service
//!
//! Handlers and middleware hand entries to a bounded mpsc queue; a
//! background worker drains it into the store. The send is `try_send`: a
//! full queue drops the entry rather than delaying or failing the request —
//! the log is strictly best-effort and isolated from its callers.

use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::mpsc;

use super::storage::{ActivityStorage, ActivityStorageError};
use super::types::*;
use crate::auth::CurrentUser;

pub struct ActivityService {
    storage: ActivityStorage,
    tx: mpsc::Sender<ActivityEntry>,
}

impl std::fmt::Debug for ActivityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityService").finish_non_exhaustive()
    }
}

impl ActivityService {
    /// Create the service plus the receiver half for the worker
    pub fn new(
        db: Surreal<Db>,
        buffer_size: usize,
    ) -> (Arc<Self>, mpsc::Receiver<ActivityEntry>) {
        let (tx, rx) = mpsc::channel(buffer_size);
        let storage = ActivityStorage::new(db);
        (Arc::new(Self { storage, tx }), rx)
    }

    /// Queue an entry for an authenticated actor (non-blocking)
    pub fn log(
        &self,
        user: &CurrentUser,
        action: ActivityAction,
        module: ActivityModule,
        details: impl Into<String>,
        ip: Option<String>,
    ) {
        self.enqueue(ActivityEntry {
            id: None,
            actor_id: Some(user.id.clone()),
            actor_name: Some(user.name.clone()),
            role: Some(user.role.as_str().to_string()),
            action,
            module,
            details: details.into(),
            ip,
            timestamp: shared::util::now_millis(),
        });
    }

    /// Queue an entry with no session attached (failed logins, batch runs)
    pub fn log_anonymous(
        &self,
        action: ActivityAction,
        module: ActivityModule,
        details: impl Into<String>,
    ) {
        self.enqueue(ActivityEntry {
            id: None,
            actor_id: None,
            actor_name: None,
            role: None,
            action,
            module,
            details: details.into(),
            ip: None,
            timestamp: shared::util::now_millis(),
        });
    }

    /// Page-load entry from the role gate (action defaults to `view`)
    pub fn log_page_view(&self, user: &CurrentUser, path: &str, ip: Option<String>) {
        self.log(
            user,
            ActivityAction::View,
            ActivityModule::from_path(path),
            path.to_string(),
            ip,
        );
    }

    fn enqueue(&self, entry: ActivityEntry) {
        // Best-effort: a full or closed queue drops the entry.
        if let Err(e) = self.tx.try_send(entry) {
            tracing::debug!("Activity entry dropped: {}", e);
        }
    }

    /// Query the activity log (HR endpoint)
    pub async fn query(
        &self,
        q: &ActivityQuery,
    ) -> Result<(Vec<ActivityEntry>, u64), ActivityStorageError> {
        self.storage.query(q).await
    }
}
