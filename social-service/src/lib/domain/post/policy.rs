//! Ownership rules for post mutations.
//!
//! Edit and delete are reserved to the owner. Reactions are open to everyone
//! except the owner. These checks have no side effects; the service decides
//! how a violation surfaces (edit/delete report the post as missing,
//! reactions report an invalid operation).

use crate::domain::post::models::Post;
use crate::domain::user::models::User;

pub fn can_edit(post: &Post, user: &User) -> bool {
    post.is_owned_by(user.id)
}

pub fn can_delete(post: &Post, user: &User) -> bool {
    post.is_owned_by(user.id)
}

/// Applies to both likes and dislikes.
pub fn can_react(post: &Post, user: &User) -> bool {
    !post.is_owned_by(user.id)
}
