use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenSettings;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type reported alongside every issued access token.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining password verification and JWT generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    settings: TokenSettings,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub fn new(settings: TokenSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(settings.secret(), settings.algorithm()),
            settings,
        }
    }

    pub fn settings(&self) -> &TokenSettings {
        &self.settings
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// True iff `password` produced `stored_hash`.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// The token lives for the configured access token lifetime.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, Some(self.settings.access_token_ttl()))?;

        Ok(AuthenticationResult {
            access_token,
            token_type: BEARER_TOKEN_TYPE,
        })
    }

    /// Sign a token for `subject` expiring `ttl` from now.
    ///
    /// Without an explicit `ttl` the fallback lifetime applies.
    ///
    /// # Errors
    /// * `EncodingFailed` - The signing backend failed
    pub fn issue_token(&self, subject: &str, ttl: Option<Duration>) -> Result<String, JwtError> {
        let ttl = ttl.unwrap_or_else(|| self.settings.fallback_ttl());
        self.jwt_handler.encode(&Claims::for_subject(subject, ttl))
    }

    /// Verify a token and return its subject.
    ///
    /// Bad signature, malformed structure, expiry and a missing subject are
    /// deliberately indistinguishable to the caller.
    ///
    /// # Errors
    /// * `InvalidCredentials` - The token cannot be trusted
    pub fn verify_token(&self, token: &str) -> Result<String, AuthenticationError> {
        let claims: Claims = self
            .jwt_handler
            .decode(token)
            .map_err(|_| AuthenticationError::InvalidCredentials)?;

        claims
            .subject()
            .map(str::to_string)
            .ok_or(AuthenticationError::InvalidCredentials)
    }
}
