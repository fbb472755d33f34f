//! Announcement Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Announcement, Urgency};

#[derive(Clone)]
pub struct AnnouncementRepository {
    base: BaseRepository,
}

impl AnnouncementRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an announcement — immutable once written
    pub async fn create(
        &self,
        title: String,
        content: String,
        author: RecordId,
        author_name: String,
        category: String,
        urgency: Urgency,
    ) -> RepoResult<Announcement> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE announcement SET
                    title = $title,
                    content = $content,
                    author = $author,
                    authorName = $author_name,
                    category = $category,
                    urgency = $urgency,
                    createdAt = $created_at
                RETURN AFTER"#,
            )
            .bind(("title", title))
            .bind(("content", content))
            .bind(("author", author))
            .bind(("author_name", author_name))
            .bind(("category", category))
            .bind(("urgency", urgency))
            .bind(("created_at", shared::util::now_millis()))
            .await?;

        let created: Option<Announcement> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create announcement".to_string()))
    }

    /// All announcements, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Announcement>> {
        let announcements: Vec<Announcement> = self
            .base
            .db()
            .query("SELECT * FROM announcement ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(announcements)
    }
}
