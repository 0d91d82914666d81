use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns registration, login and the mapping from a bearer token to the
/// user it authenticates.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token signing
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(command.username.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError> {
        let user = self
            .repository
            .find_by_username(&command.username)
            .await?
            .ok_or(UserError::IncorrectUsernameOrPassword)?;

        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, user.username.as_str())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
                    UserError::IncorrectUsernameOrPassword
                }
                AuthenticationError::PasswordError(err) => {
                    UserError::Unknown(format!("Password verification failed: {}", err))
                }
                AuthenticationError::JwtError(err) => {
                    UserError::Unknown(format!("Token generation failed: {}", err))
                }
            })?;

        Ok(AccessToken {
            access_token: result.access_token,
            token_type: result.token_type.to_string(),
        })
    }

    async fn resolve_by_subject(&self, subject: &str) -> Result<Option<User>, UserError> {
        self.repository.find_by_username(subject).await
    }

    async fn current_user(&self, token: &str) -> Result<User, UserError> {
        let subject = self.authenticator.verify_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            UserError::InvalidCredentials
        })?;

        self.resolve_by_subject(&subject).await?.ok_or_else(|| {
            tracing::warn!(subject = %subject, "Token subject does not resolve to a user");
            UserError::InvalidCredentials
        })
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
