use std::fmt;

use chrono::Duration;
use jsonwebtoken::Algorithm;

/// Lifetime of tokens issued by a successful login.
pub const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 30;

/// Lifetime applied when a token is issued without an explicit TTL.
pub const DEFAULT_FALLBACK_TTL_MINUTES: i64 = 15;

/// Process-wide token configuration, fixed at startup.
#[derive(Clone)]
pub struct TokenSettings {
    secret: Vec<u8>,
    algorithm: Algorithm,
    access_token_ttl: Duration,
    fallback_ttl: Duration,
}

impl TokenSettings {
    /// HS256 settings with the default 30 minute access and 15 minute fallback lifetimes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: Duration::minutes(DEFAULT_ACCESS_TOKEN_TTL_MINUTES),
            fallback_ttl: Duration::minutes(DEFAULT_FALLBACK_TTL_MINUTES),
        }
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    pub fn with_fallback_ttl(mut self, ttl: Duration) -> Self {
        self.fallback_ttl = ttl;
        self
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    pub fn fallback_ttl(&self) -> Duration {
        self.fallback_ttl
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("fallback_ttl", &self.fallback_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TokenSettings::new("secret");

        assert_eq!(settings.algorithm(), Algorithm::HS256);
        assert_eq!(settings.access_token_ttl(), Duration::minutes(30));
        assert_eq!(settings.fallback_ttl(), Duration::minutes(15));
        assert_eq!(settings.secret(), b"secret");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = TokenSettings::new("super-secret-value");

        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("[redacted]"));
    }
}
