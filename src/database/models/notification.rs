use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub content: String,
    pub viewed: bool,
    pub created_at: DateTime<Utc>,
}

/// Serialized notification shape returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationView {
    pub notification_id: Uuid,
    pub post_id: Uuid,
    pub content: String,
    pub viewed: bool,
    pub created_at: DateTime<Utc>,
}
