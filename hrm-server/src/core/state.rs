use std::sync::{Arc, Mutex};

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::mpsc;

use crate::activity::{ActivityEntry, ActivityService, ActivityStorage, ActivityWorker};
use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// Bounded queue between request handlers and the activity worker
const ACTIVITY_QUEUE_SIZE: usize = 1024;

/// Server state — shared references to every service
///
/// Cloning is shallow (`Arc` members); one instance is shared by every
/// request handler and middleware layer.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Configuration (immutable) |
/// | db | Embedded database handle |
/// | jwt_service | Session token issue/validate |
/// | activity | Activity log queue + query surface |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT session service
    pub jwt_service: Arc<JwtService>,
    /// Activity log service
    pub activity: Arc<ActivityService>,
    /// Receiver half for the activity worker, consumed by
    /// [`Self::start_background_tasks`]
    activity_rx: Arc<Mutex<Option<mpsc::Receiver<ActivityEntry>>>>,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// Order:
    /// 1. working directory layout
    /// 2. database (work_dir/database/hrm.db) + one-time schema definition
    /// 3. services (JWT, activity log)
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be initialized.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("hrm.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let (activity, activity_rx) = ActivityService::new(db.clone(), ACTIVITY_QUEUE_SIZE);

        Self {
            config: config.clone(),
            db,
            jwt_service,
            activity,
            activity_rx: Arc::new(Mutex::new(Some(activity_rx))),
        }
    }

    /// Start background tasks — must run before serving requests
    ///
    /// Spawns the activity log worker that drains the entry queue.
    pub fn start_background_tasks(&self) {
        let rx = self
            .activity_rx
            .lock()
            .expect("Failed to lock activity receiver")
            .take();
        if let Some(rx) = rx {
            let worker = ActivityWorker::new(ActivityStorage::new(self.db.clone()));
            tokio::spawn(worker.run(rx));
        }
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
