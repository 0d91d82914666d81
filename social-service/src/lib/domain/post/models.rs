use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Short text post owned by exactly one user.
///
/// The owner is fixed at creation. Like and dislike counters only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub owner_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
    pub dislikes_count: i64,
}

impl Post {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Post unique identifier type, assigned by storage on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Public fields of the user owning a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOwner {
    pub id: UserId,
    pub username: Username,
    pub email: String,
}

impl From<&User> for PostOwner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// A post resolved together with its owner, as served by read operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithOwner {
    pub post: Post,
    pub owner: PostOwner,
}

/// A post about to be inserted; storage assigns the id and zeroes the counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub owner_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Which counter a reaction increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
