use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Image payload attached to a post, transmitted and stored base64-encoded
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: Uuid,
    pub post_id: Uuid,
    pub base64: String,
    pub created_at: DateTime<Utc>,
}
