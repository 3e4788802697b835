use sqlx::PgPool;
use uuid::Uuid;

/// Membership-based authorization: a user may read/write content in a
/// group iff a membership edge exists.
pub async fn has_group_permission(
    pool: &PgPool,
    user_id: Uuid,
    group_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM group_members WHERE user_id = $1 AND group_id = $2)",
    )
    .bind(user_id)
    .bind(group_id)
    .fetch_one(pool)
    .await
}
