use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// 1-5 star rating left on a post
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}
