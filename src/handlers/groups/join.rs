use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::middleware::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::services::GroupService;

/// GET /api/groups/:group_id/join - add the requester to the member set.
/// Groups are public-joinable; a duplicate join is a 409.
pub async fn group_join(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(group_id): Path<Uuid>,
) -> ApiResult<Value> {
    GroupService::new(state.pool.clone())
        .join_group(group_id, auth.user_id)
        .await?;
    Ok(ApiResponse::success(json!({"message": "User joined group"})))
}
