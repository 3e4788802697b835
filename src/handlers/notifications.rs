use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::database::models::NotificationView;
use crate::middleware::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::services::NotificationService;

/// GET /api/notifications - the requester's notifications, newest first
pub async fn notification_list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<NotificationView>> {
    let notifications = NotificationService::new(state.pool.clone())
        .list_for_user(auth.user_id)
        .await?;
    Ok(ApiResponse::success(notifications))
}

/// PUT /api/notifications/:id/viewed - mark one of the requester's
/// notifications as viewed
pub async fn notification_mark_viewed(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(notification_id): Path<Uuid>,
) -> ApiResult<Value> {
    NotificationService::new(state.pool.clone())
        .mark_viewed(notification_id, auth.user_id)
        .await?;
    Ok(ApiResponse::success(json!({"message": "Notification viewed"})))
}
