use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Serialized group shape returned by the API, with membership and
/// content summaries alongside the raw columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GroupView {
    pub group_id: Uuid,
    pub name: String,
    pub description: String,
    pub member_count: i64,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
}
