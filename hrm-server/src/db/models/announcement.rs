//! Announcement Model
//!
//! Announcements are immutable after creation — there is no update endpoint.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type AnnouncementId = RecordId;

/// Announcement urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Default for Urgency {
    fn default() -> Self {
        Self::Medium
    }
}

impl Urgency {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Announcement entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AnnouncementId>,
    pub title: String,
    pub content: String,
    #[serde(with = "serde_helpers::record_id")]
    pub author: RecordId,
    /// Author name snapshot
    pub author_name: String,
    pub category: String,
    #[serde(default)]
    pub urgency: Urgency,
    pub created_at: i64,
}

/// Create announcement body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementCreate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub urgency: Option<String>,
}
