use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Serialized post shape returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostView {
    pub post_id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub photo_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Validated create-post request body
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub photos: Vec<String>,
}

impl NewPost {
    /// Parse the request body. Title, content and the photos key must all
    /// be present; photos may be an empty array but every entry must be a
    /// string payload.
    pub fn from_body(body: &Value) -> Option<Self> {
        let title = body.get("title")?.as_str()?;
        let content = body.get("content")?.as_str()?;
        let photos = body
            .get("photos")?
            .as_array()?
            .iter()
            .map(|p| p.as_str().map(str::to_string))
            .collect::<Option<Vec<String>>>()?;

        Some(Self {
            title: title.to_string(),
            content: content.to_string(),
            photos,
        })
    }
}
