use thiserror::Error;

use crate::domain::post::models::PostId;
use crate::domain::post::models::ReactionKind;

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    /// Missing post, or (for edit/delete) a post the caller does not own.
    #[error("Post {0} not found")]
    NotFound(PostId),

    #[error("Cannot {kind} your own post {post_id}")]
    CannotReactToOwnPost { post_id: PostId, kind: ReactionKind },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
