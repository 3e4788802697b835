use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Group, GroupView, NewPost, PostView};
use crate::services::permission::has_group_permission;

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("No such group")]
    GroupNotFound,
    #[error("No such user")]
    UserNotFound,
    #[error("No group matches the phrase")]
    NoMatchingGroups,
    #[error("User already in group")]
    AlreadyMember,
    #[error("No permission")]
    PermissionDenied,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const GROUP_VIEW_SQL: &str = r#"
    SELECT g.id AS group_id,
           g.name,
           g.description,
           g.created_at,
           (SELECT COUNT(*) FROM group_members m WHERE m.group_id = g.id) AS member_count,
           (SELECT COUNT(*) FROM posts p WHERE p.group_id = g.id) AS post_count
      FROM groups g
"#;

const POST_VIEW_SQL: &str = r#"
    SELECT p.id AS post_id,
           p.group_id,
           p.user_id,
           u.name || ' ' || u.surname AS author,
           p.title,
           p.content,
           (SELECT COUNT(*) FROM photos ph WHERE ph.post_id = p.id) AS photo_count,
           p.created_at
      FROM posts p
      JOIN users u ON u.id = p.user_id
"#;

pub struct GroupService {
    pool: PgPool,
}

impl GroupService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every group, in storage order
    pub async fn list_groups(&self) -> Result<Vec<GroupView>, GroupError> {
        let sql = format!("{} ORDER BY g.created_at", GROUP_VIEW_SQL);
        let groups = sqlx::query_as::<_, GroupView>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(groups)
    }

    /// Groups the given user belongs to. Fails with UserNotFound when the
    /// identity does not resolve, which should not happen for an
    /// authenticated caller.
    pub async fn user_groups(&self, user_id: Uuid) -> Result<Vec<GroupView>, GroupError> {
        if !self.user_exists(user_id).await? {
            return Err(GroupError::UserNotFound);
        }

        let sql = format!(
            "{} JOIN group_members gm ON gm.group_id = g.id WHERE gm.user_id = $1 ORDER BY g.created_at",
            GROUP_VIEW_SQL
        );
        let groups = sqlx::query_as::<_, GroupView>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(groups)
    }

    pub async fn group_by_id(&self, group_id: Uuid) -> Result<GroupView, GroupError> {
        let sql = format!("{} WHERE g.id = $1", GROUP_VIEW_SQL);
        sqlx::query_as::<_, GroupView>(&sql)
            .bind(group_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GroupError::GroupNotFound)
    }

    /// Add the user to the group's member set. Joining is open to any
    /// authenticated user; no permission check beyond identity resolution.
    /// The composite primary key on group_members makes concurrent
    /// duplicate joins resolve to exactly one success.
    pub async fn join_group(&self, group_id: Uuid, user_id: Uuid) -> Result<(), GroupError> {
        if !self.group_exists(group_id).await? {
            return Err(GroupError::GroupNotFound);
        }
        if !self.user_exists(user_id).await? {
            return Err(GroupError::UserNotFound);
        }

        let result = sqlx::query(
            "INSERT INTO group_members (user_id, group_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(group_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GroupError::AlreadyMember);
        }

        tracing::info!(%user_id, %group_id, "user joined group");
        Ok(())
    }

    /// Posts in a group, oldest first. Requires membership; a group with
    /// no posts yields an empty list.
    pub async fn posts_in_group(
        &self,
        group_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<PostView>, GroupError> {
        if !self.group_exists(group_id).await? {
            return Err(GroupError::GroupNotFound);
        }
        if !has_group_permission(&self.pool, user_id, group_id).await? {
            return Err(GroupError::PermissionDenied);
        }

        let sql = format!("{} WHERE p.group_id = $1 ORDER BY p.created_at", POST_VIEW_SQL);
        let posts = sqlx::query_as::<_, PostView>(&sql)
            .bind(group_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    /// The central write path: create the post, attach its photos, and
    /// fan out one notification per other group member, all inside a
    /// single transaction. Any failure rolls the whole unit back.
    pub async fn create_post(
        &self,
        group_id: Uuid,
        user_id: Uuid,
        new_post: NewPost,
    ) -> Result<Uuid, GroupError> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT id, name, description, created_at FROM groups WHERE id = $1",
        )
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(GroupError::GroupNotFound)?;

        if !has_group_permission(&self.pool, user_id, group_id).await? {
            return Err(GroupError::PermissionDenied);
        }

        let mut tx = self.pool.begin().await?;

        let post_id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO posts (group_id, user_id, title, content) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(group_id)
        .bind(user_id)
        .bind(&new_post.title)
        .bind(&new_post.content)
        .fetch_one(&mut *tx)
        .await?;

        for payload in &new_post.photos {
            sqlx::query("INSERT INTO photos (post_id, base64) VALUES ($1, $2)")
                .bind(post_id)
                .bind(payload)
                .execute(&mut *tx)
                .await?;
        }

        let members =
            sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM group_members WHERE group_id = $1")
                .bind(group_id)
                .fetch_all(&mut *tx)
                .await?;

        let message = notification_message(&group.name);
        for recipient in fan_out_recipients(&members, user_id) {
            sqlx::query("INSERT INTO notifications (user_id, post_id, content) VALUES ($1, $2, $3)")
                .bind(recipient)
                .bind(post_id)
                .bind(&message)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(%post_id, %group_id, %user_id, photos = new_post.photos.len(), "post created");
        Ok(post_id)
    }

    /// Case-insensitive substring match against every group's name or
    /// description. A full scan; acceptable at this scale.
    pub async fn search_groups(&self, phrase: &str) -> Result<Vec<GroupView>, GroupError> {
        let groups = self.list_groups().await?;
        let matches: Vec<GroupView> = groups
            .into_iter()
            .filter(|g| phrase_matches(&g.name, &g.description, phrase))
            .collect();

        if matches.is_empty() {
            return Err(GroupError::NoMatchingGroups);
        }
        Ok(matches)
    }

    async fn group_exists(&self, group_id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM groups WHERE id = $1)")
            .bind(group_id)
            .fetch_one(&self.pool)
            .await
    }

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }
}

/// True when the phrase occurs in the group name or description,
/// ignoring case
pub fn phrase_matches(name: &str, description: &str, phrase: &str) -> bool {
    let phrase = phrase.to_lowercase();
    name.to_lowercase().contains(&phrase) || description.to_lowercase().contains(&phrase)
}

/// Everyone in the member set except the post author
pub fn fan_out_recipients(members: &[Uuid], author: Uuid) -> Vec<Uuid> {
    members.iter().copied().filter(|m| *m != author).collect()
}

pub fn notification_message(group_name: &str) -> String {
    format!("New post in group {}", group_name)
}
