//! Activity log background worker
//!
//! Consumes entries from the mpsc queue and writes them to the store.
//! Exits when the channel closes.

use super::storage::ActivityStorage;
use super::types::ActivityEntry;

pub struct ActivityWorker {
    storage: ActivityStorage,
}

impl ActivityWorker {
    pub fn new(storage: ActivityStorage) -> Self {
        Self { storage }
    }

    /// Run the worker (blocks until the channel closes)
    pub async fn run(self, mut rx: tokio::sync::mpsc::Receiver<ActivityEntry>) {
        tracing::info!("Activity log worker started");

        while let Some(entry) = rx.recv().await {
            match self.storage.append(entry).await {
                Ok(entry) => {
                    tracing::debug!(
                        action = %entry.action,
                        module = %entry.module,
                        "Activity entry recorded"
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to write activity entry: {:?}", e);
                }
            }
        }

        tracing::info!("Activity log channel closed, worker stopping");
    }
}
