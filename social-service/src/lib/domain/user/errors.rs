use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    // Domain-level errors
    #[error("User with ID {0} not found")]
    NotFound(UserId),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    /// Wrong username or password at login.
    #[error("Incorrect username or password")]
    IncorrectUsernameOrPassword,

    /// Token rejected or its subject no longer resolves to a user.
    #[error("Could not validate credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
