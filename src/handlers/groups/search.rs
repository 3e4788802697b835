use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::GroupView;
use crate::response::{ApiResponse, ApiResult};
use crate::services::GroupService;

/// GET /api/groups/search/:phrase - case-insensitive substring search
/// over group names and descriptions
pub async fn group_search(
    State(state): State<AppState>,
    Path(phrase): Path<String>,
) -> ApiResult<Vec<GroupView>> {
    let groups = GroupService::new(state.pool.clone())
        .search_groups(&phrase)
        .await?;
    Ok(ApiResponse::success(groups))
}
