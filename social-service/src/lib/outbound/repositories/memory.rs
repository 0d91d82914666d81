use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostOwner;
use crate::domain::post::models::PostWithOwner;
use crate::domain::post::models::ReactionKind;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

#[derive(Debug, Default)]
struct Tables {
    /// Keyed by id so iteration follows insertion order
    users: BTreeMap<UserId, User>,
    posts: BTreeMap<PostId, Post>,
    last_user_id: i64,
    last_post_id: i64,
}

impl Tables {
    fn with_owner(&self, post: &Post) -> Option<PostWithOwner> {
        self.users.get(&post.owner_id).map(|user| PostWithOwner {
            post: post.clone(),
            owner: PostOwner::from(user),
        })
    }
}

/// Process-local storage backing both repository ports.
///
/// Clones share the same tables. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        tables.last_user_id += 1;
        let created = User {
            id: UserId(tables.last_user_id),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        tables.users.insert(created.id, created.clone());

        tracing::debug!("Stored user {} in memory", created.id);

        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&post.owner_id) {
            return Err(PostError::DatabaseError(format!(
                "owner {} does not exist",
                post.owner_id
            )));
        }

        tables.last_post_id += 1;
        let created = Post {
            id: PostId(tables.last_post_id),
            owner_id: post.owner_id,
            text: post.text,
            created_at: post.created_at,
            likes_count: 0,
            dislikes_count: 0,
        };
        tables.posts.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<PostWithOwner>, PostError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).and_then(|p| tables.with_owner(p)))
    }

    async fn find_owned(&self, id: PostId, owner_id: UserId) -> Result<Option<Post>, PostError> {
        Ok(self
            .tables
            .read()
            .await
            .posts
            .get(&id)
            .filter(|p| p.is_owned_by(owner_id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<PostWithOwner>, PostError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter_map(|p| tables.with_owner(p))
            .collect())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<PostWithOwner>, PostError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|p| p.is_owned_by(owner_id))
            .filter_map(|p| tables.with_owner(p))
            .collect())
    }

    async fn update_text(&self, post: Post) -> Result<Post, PostError> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .posts
            .get_mut(&post.id)
            .ok_or(PostError::NotFound(post.id))?;

        stored.text = post.text;
        Ok(stored.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), PostError> {
        self.tables
            .write()
            .await
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(PostError::NotFound(id))
    }

    async fn increment_reaction(
        &self,
        id: PostId,
        kind: ReactionKind,
    ) -> Result<Option<Post>, PostError> {
        let mut tables = self.tables.write().await;

        Ok(tables.posts.get_mut(&id).map(|post| {
            match kind {
                ReactionKind::Like => post.likes_count += 1,
                ReactionKind::Dislike => post.dislikes_count += 1,
            }
            post.clone()
        }))
    }
}
