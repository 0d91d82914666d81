use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    /// * `Unknown` - Password hashing failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Exchange a username and password for a bearer token.
    ///
    /// # Errors
    /// * `IncorrectUsernameOrPassword` - Unknown username or wrong password
    /// * `DatabaseError` - Database operation failed
    /// * `Unknown` - Token signing failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError>;

    /// Look up the user a token subject names (exact, case-sensitive match).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn resolve_by_subject(&self, subject: &str) -> Result<Option<User>, UserError>;

    /// Resolve a bearer token to the user it authenticates.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Token invalid, expired, or its subject is unknown
    /// * `DatabaseError` - Database operation failed
    async fn current_user(&self, token: &str) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// Retrieve every registered user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Created user entity with its storage-assigned id
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
