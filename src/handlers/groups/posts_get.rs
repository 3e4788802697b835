use axum::{
    extract::{Path, State},
    Extension,
};
use uuid::Uuid;

use crate::app::AppState;
use crate::database::models::PostView;
use crate::middleware::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::services::GroupService;

/// GET /api/groups/:group_id/posts - posts in a group, members only.
/// A group with no posts yields an empty list.
pub async fn post_list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(group_id): Path<Uuid>,
) -> ApiResult<Vec<PostView>> {
    let posts = GroupService::new(state.pool.clone())
        .posts_in_group(group_id, auth.user_id)
        .await?;
    Ok(ApiResponse::success(posts))
}
