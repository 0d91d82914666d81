use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::PostError;
use super::models::NewPost;
use super::models::Post;
use super::models::PostId;
use super::models::PostWithOwner;
use super::models::ReactionKind;
use super::policy;
use super::ports::PostRepository;
use super::ports::PostServicePort;
use crate::domain::user::models::User;

/// Concrete implementation of PostServicePort.
///
/// Edit and delete look the post up scoped to the caller, so a post owned by
/// someone else is reported exactly like a missing one. Reactions look the
/// post up by id alone and reject the owner with a distinct error.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn find_owned(&self, id: PostId, user: &User) -> Result<Post, PostError> {
        self.repository
            .find_owned(id, user.id)
            .await?
            .ok_or(PostError::NotFound(id))
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(&self, text: String, owner: &User) -> Result<Post, PostError> {
        let post = self
            .repository
            .create(NewPost {
                owner_id: owner.id,
                text,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(post_id = %post.id, owner_id = %owner.id, "Post created");

        Ok(post)
    }

    async fn edit_post(&self, id: PostId, text: String, user: &User) -> Result<Post, PostError> {
        let mut post = self.find_owned(id, user).await?;
        // Already guaranteed by the scoped lookup.
        debug_assert!(policy::can_edit(&post, user));

        post.text = text;
        let post = self.repository.update_text(post).await?;

        tracing::info!(post_id = %id, user_id = %user.id, "Post edited");

        Ok(post)
    }

    async fn delete_post(&self, id: PostId, user: &User) -> Result<(), PostError> {
        let post = self.find_owned(id, user).await?;
        debug_assert!(policy::can_delete(&post, user));

        self.repository.delete(post.id).await?;

        tracing::info!(post_id = %id, user_id = %user.id, "Post deleted");

        Ok(())
    }

    async fn react_to_post(
        &self,
        id: PostId,
        user: &User,
        kind: ReactionKind,
    ) -> Result<Post, PostError> {
        let found = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id))?;

        if !policy::can_react(&found.post, user) {
            tracing::warn!(
                post_id = %id,
                user_id = %user.id,
                kind = %kind,
                "Owner reacted to own post"
            );
            return Err(PostError::CannotReactToOwnPost { post_id: id, kind });
        }

        let post = self
            .repository
            .increment_reaction(id, kind)
            .await?
            .ok_or(PostError::NotFound(id))?;

        tracing::info!(post_id = %id, user_id = %user.id, kind = %kind, "Reaction recorded");

        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<PostWithOwner>, PostError> {
        self.repository.list_all().await
    }

    async fn list_posts_for_user(&self, user: &User) -> Result<Vec<PostWithOwner>, PostError> {
        self.repository.list_by_owner(user.id).await
    }

    async fn get_post(&self, id: PostId) -> Result<PostWithOwner, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id))
    }
}
