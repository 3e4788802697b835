use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::database::models::NewPost;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::services::GroupService;

/// POST /api/groups/:group_id/posts - create a post with photo
/// attachments and notification fan-out to the other members
pub async fn post_create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(group_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    let new_post =
        NewPost::from_body(&body).ok_or_else(|| ApiError::bad_request("Missing data"))?;

    GroupService::new(state.pool.clone())
        .create_post(group_id, auth.user_id, new_post)
        .await?;

    Ok(ApiResponse::success(json!({"message": "Post added"})))
}
