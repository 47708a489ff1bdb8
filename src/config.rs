//! Token issuer configuration.
//!
//! Read-only, process-wide inputs: the signing secret, the issuer and
//! audience names, and the token lifetime. Validation happens here so a
//! missing value is a fatal startup error rather than a per-request failure.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Default token lifetime: 3 days.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3 * 24 * 60 * 60;

const ENV_SECRET_KEY: &str = "IDENTITY_SECRET_KEY";
const ENV_ISSUER: &str = "IDENTITY_TOKEN_ISSUER";
const ENV_AUDIENCE: &str = "IDENTITY_TOKEN_AUDIENCE";
const ENV_TOKEN_TTL: &str = "IDENTITY_TOKEN_TTL_SECONDS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("signing secret key is missing or empty")]
    MissingSecret,
    #[error("token issuer is missing or empty")]
    MissingIssuer,
    #[error("token audience is missing or empty")]
    MissingAudience,
    #[error("invalid token ttl: {0}")]
    InvalidTtl(String),
}

/// Signing configuration shared read-only by all callers.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    secret: SecretString,
    issuer: String,
    audience: String,
    token_ttl_seconds: i64,
}

impl TokenConfig {
    /// Build a validated configuration with the default 3-day token lifetime.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the secret, issuer, or audience is empty.
    pub fn new(
        secret: SecretString,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let issuer = issuer.into();
        let audience = audience.into();
        if secret.expose_secret().is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if issuer.is_empty() {
            return Err(ConfigError::MissingIssuer);
        }
        if audience.is_empty() {
            return Err(ConfigError::MissingAudience);
        }
        Ok(Self {
            secret,
            issuer,
            audience,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        })
    }

    /// Read the configuration from the process environment
    /// (`IDENTITY_SECRET_KEY`, `IDENTITY_TOKEN_ISSUER`,
    /// `IDENTITY_TOKEN_AUDIENCE`, optional `IDENTITY_TOKEN_TTL_SECONDS`).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is absent or empty,
    /// or if the ttl override is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var(ENV_SECRET_KEY).unwrap_or_default();
        let issuer = std::env::var(ENV_ISSUER).unwrap_or_default();
        let audience = std::env::var(ENV_AUDIENCE).unwrap_or_default();
        let config = Self::new(SecretString::from(secret), issuer, audience)?;

        match std::env::var(ENV_TOKEN_TTL) {
            Ok(value) => {
                let seconds: i64 = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidTtl(value.clone()))?;
                if seconds <= 0 {
                    return Err(ConfigError::InvalidTtl(value));
                }
                Ok(config.with_token_ttl_seconds(seconds))
            }
            Err(_) => Ok(config),
        }
    }

    /// Override the token lifetime; the 3-day default stays unless overridden.
    #[must_use]
    pub fn with_token_ttl_seconds(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    #[must_use]
    pub fn audience(&self) -> &str {
        &self.audience
    }

    #[must_use]
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }

    pub(crate) fn secret(&self) -> &SecretString {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TokenConfig, DEFAULT_TOKEN_TTL_SECONDS};
    use secrecy::SecretString;

    fn config() -> TokenConfig {
        TokenConfig::new(
            SecretString::from("test-signing-secret".to_string()),
            "https://identity.example.test",
            "identity-clients",
        )
        .unwrap()
    }

    #[test]
    fn defaults_to_three_days() {
        assert_eq!(config().token_ttl_seconds(), DEFAULT_TOKEN_TTL_SECONDS);
        assert_eq!(DEFAULT_TOKEN_TTL_SECONDS, 259_200);
    }

    #[test]
    fn ttl_override_applies() {
        let config = config().with_token_ttl_seconds(60);
        assert_eq!(config.token_ttl_seconds(), 60);
    }

    #[test]
    fn empty_secret_is_fatal() {
        let result = TokenConfig::new(SecretString::from("".to_string()), "iss", "aud");
        assert!(matches!(result, Err(ConfigError::MissingSecret)));
    }

    #[test]
    fn empty_issuer_or_audience_is_fatal() {
        let result = TokenConfig::new(SecretString::from("key".to_string()), "", "aud");
        assert!(matches!(result, Err(ConfigError::MissingIssuer)));

        let result = TokenConfig::new(SecretString::from("key".to_string()), "iss", "");
        assert!(matches!(result, Err(ConfigError::MissingAudience)));
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("test-signing-secret"));
    }
}
