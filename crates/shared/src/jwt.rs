//! Access tokens for the legacy users.
//!
//! A token carries the user code as subject and is HS256-signed with the
//! configured secret. It expires after a fixed window; there is no refresh.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

use crate::auth::Claims;
use crate::config::JwtConfig;

/// Longest token lifetime accepted from configuration (one year).
pub const MAX_TTL_SECS: i64 = 366 * 24 * 60 * 60;

/// Signing secret and lifetime of issued tokens.
#[derive(Clone)]
pub struct TokenConfig {
    /// HMAC secret.
    pub secret: String,
    /// Lifetime of an access token.
    pub ttl: Duration,
}

impl TokenConfig {
    /// Builds the token settings from the `[jwt]` configuration section.
    #[must_use]
    pub fn from_settings(settings: &JwtConfig) -> Self {
        let secs = i64::try_from(settings.access_token_expiry_secs)
            .unwrap_or(MAX_TTL_SECS)
            .min(MAX_TTL_SECS);
        Self {
            secret: settings.secret.clone(),
            ttl: Duration::seconds(secs),
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Malformed token, bad signature or wrong algorithm.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,
}

/// Issues and checks access tokens.
#[derive(Clone)]
pub struct JwtService {
    ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// Creates a service signing with `config.secret`.
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            ttl: config.ttl,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for `user_code`.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if signing fails.
    pub fn generate_access_token(&self, user_code: &str) -> Result<String, JwtError> {
        let claims = Claims::new(user_code, Utc::now() + self.ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Checks signature and expiry, returning the claims.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` past `exp`, `JwtError::DecodingError` otherwise.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }

    /// Token lifetime in seconds, as reported in the login response.
    #[must_use]
    pub fn access_token_expires_in(&self) -> i64 {
        self.ttl.num_seconds()
    }
}
