use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostOwner;
use crate::domain::post::models::PostWithOwner;
use crate::domain::post::models::ReactionKind;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

const POST_COLUMNS: &str = "id, user_id, text, created_at, likes_count, dislikes_count";

const POST_WITH_OWNER_SELECT: &str = r#"
    SELECT p.id, p.user_id, p.text, p.created_at, p.likes_count, p.dislikes_count,
           u.username, u.email
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &PgRow) -> Result<Post, PostError> {
        let post = || -> Result<Post, sqlx::Error> {
            Ok(Post {
                id: PostId(row.try_get("id")?),
                owner_id: UserId(row.try_get("user_id")?),
                text: row.try_get("text")?,
                created_at: row.try_get("created_at")?,
                likes_count: row.try_get("likes_count")?,
                dislikes_count: row.try_get("dislikes_count")?,
            })
        };

        post().map_err(|e| PostError::DatabaseError(e.to_string()))
    }

    fn row_to_post_with_owner(row: &PgRow) -> Result<PostWithOwner, PostError> {
        let post = Self::row_to_post(row)?;

        let owner = || -> Result<PostOwner, sqlx::Error> {
            Ok(PostOwner {
                id: post.owner_id,
                username: Username::new(row.try_get("username")?)
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
                email: row.try_get("email")?,
            })
        };
        let owner = owner().map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(PostWithOwner { post, owner })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO posts (user_id, text, created_at)
            VALUES ($1, $2, $3)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(post.owner_id.0)
        .bind(&post.text)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Self::row_to_post(&row)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<PostWithOwner>, PostError> {
        let row = sqlx::query(&format!("{POST_WITH_OWNER_SELECT} WHERE p.id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_post_with_owner).transpose()
    }

    async fn find_owned(&self, id: PostId, owner_id: UserId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_post).transpose()
    }

    async fn list_all(&self) -> Result<Vec<PostWithOwner>, PostError> {
        let rows = sqlx::query(&format!("{POST_WITH_OWNER_SELECT} ORDER BY p.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_post_with_owner).collect()
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<PostWithOwner>, PostError> {
        let rows = sqlx::query(&format!(
            "{POST_WITH_OWNER_SELECT} WHERE p.user_id = $1 ORDER BY p.id"
        ))
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_post_with_owner).collect()
    }

    async fn update_text(&self, post: Post) -> Result<Post, PostError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE posts
            SET text = $2
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(post.id.0)
        .bind(&post.text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_post(&r),
            None => Err(PostError::NotFound(post.id)),
        }
    }

    async fn delete(&self, id: PostId) -> Result<(), PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id));
        }

        Ok(())
    }

    async fn increment_reaction(
        &self,
        id: PostId,
        kind: ReactionKind,
    ) -> Result<Option<Post>, PostError> {
        // Single statement: the row lock taken by UPDATE serialises concurrent reactions.
        let counter = match kind {
            ReactionKind::Like => "likes_count",
            ReactionKind::Dislike => "dislikes_count",
        };

        let row = sqlx::query(&format!(
            r#"
            UPDATE posts
            SET {counter} = {counter} + 1
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_post).transpose()
    }
}
