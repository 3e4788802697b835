use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::NotificationView;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("No such notification")]
    NotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The user's notifications, newest first
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<NotificationView>, NotificationError> {
        let notifications = sqlx::query_as::<_, NotificationView>(
            r#"
            SELECT id AS notification_id, post_id, content, viewed, created_at
              FROM notifications
             WHERE user_id = $1
             ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notifications)
    }

    /// Mark a notification as viewed. Scoped to the owning user so one
    /// user cannot touch another's notifications.
    pub async fn mark_viewed(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), NotificationError> {
        let result =
            sqlx::query("UPDATE notifications SET viewed = TRUE WHERE id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(NotificationError::NotFound);
        }
        Ok(())
    }
}
