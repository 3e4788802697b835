use axum::extract::State;

use crate::app::AppState;
use crate::database::models::GroupView;
use crate::response::{ApiResponse, ApiResult};
use crate::services::GroupService;

/// GET /api/groups and /api/groups/list - every group, no pagination
pub async fn group_list(State(state): State<AppState>) -> ApiResult<Vec<GroupView>> {
    let groups = GroupService::new(state.pool.clone()).list_groups().await?;
    Ok(ApiResponse::success(groups))
}
