use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostWithOwner;
use crate::domain::post::models::ReactionKind;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
///
/// Every mutation takes the already-resolved acting user.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Publish a new post owned by `owner`. Any text is accepted, including empty.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, text: String, owner: &User) -> Result<Post, PostError>;

    /// Replace the text of a post owned by `user`.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist or belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn edit_post(&self, id: PostId, text: String, user: &User) -> Result<Post, PostError>;

    /// Permanently remove a post owned by `user`.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist or belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: PostId, user: &User) -> Result<(), PostError>;

    /// Like or dislike someone else's post. Not idempotent.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `CannotReactToOwnPost` - `user` owns the post
    /// * `DatabaseError` - Database operation failed
    async fn react_to_post(
        &self,
        id: PostId,
        user: &User,
        kind: ReactionKind,
    ) -> Result<Post, PostError>;

    /// Every post with its owner, in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self) -> Result<Vec<PostWithOwner>, PostError>;

    /// Posts owned by `user`, in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts_for_user(&self, user: &User) -> Result<Vec<PostWithOwner>, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: PostId) -> Result<PostWithOwner, PostError>;
}

/// Persistence operations for posts.
///
/// Each call runs as its own unit of work against storage.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Insert a post with both counters at zero.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: NewPost) -> Result<Post, PostError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: PostId) -> Result<Option<PostWithOwner>, PostError>;

    /// Ownership-scoped lookup: matches only when `id` exists and is owned by `owner_id`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_owned(&self, id: PostId, owner_id: UserId) -> Result<Option<Post>, PostError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<PostWithOwner>, PostError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<PostWithOwner>, PostError>;

    /// Persist a new text for an existing post.
    ///
    /// # Errors
    /// * `NotFound` - Post no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn update_text(&self, post: Post) -> Result<Post, PostError>;

    /// # Errors
    /// * `NotFound` - Post no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: PostId) -> Result<(), PostError>;

    /// Atomically add one to the counter for `kind`.
    ///
    /// Concurrent calls against the same post must all be counted.
    ///
    /// # Returns
    /// The updated post, or None if it no longer exists
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn increment_reaction(
        &self,
        id: PostId,
        kind: ReactionKind,
    ) -> Result<Option<Post>, PostError>;
}
