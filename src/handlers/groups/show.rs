use axum::extract::{Path, State};
use uuid::Uuid;

use crate::app::AppState;
use crate::database::models::GroupView;
use crate::response::{ApiResponse, ApiResult};
use crate::services::GroupService;

/// GET /api/groups/:group_id - single group by id
pub async fn group_show(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> ApiResult<GroupView> {
    let group = GroupService::new(state.pool.clone())
        .group_by_id(group_id)
        .await?;
    Ok(ApiResponse::success(group))
}
