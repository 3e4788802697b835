use axum::{extract::State, Extension};

use crate::app::AppState;
use crate::database::models::GroupView;
use crate::middleware::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::services::GroupService;

/// GET /api/groups/my - groups the requesting user belongs to
pub async fn group_my(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<GroupView>> {
    let groups = GroupService::new(state.pool.clone())
        .user_groups(auth.user_id)
        .await?;
    Ok(ApiResponse::success(groups))
}
