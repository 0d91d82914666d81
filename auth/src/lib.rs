//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the social service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited JWT access tokens
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenSettings};
//!
//! let auth = Authenticator::new(TokenSettings::new("secret_key_at_least_32_bytes_long!"));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "alice").unwrap();
//! assert_eq!(result.token_type, "bearer");
//!
//! // Validate token
//! let subject = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(subject, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::BEARER_TOKEN_TYPE;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenSettings;
pub use password::PasswordError;
pub use password::PasswordHasher;
