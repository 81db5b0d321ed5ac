//! Authentication types for JWT and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest user code the legacy `ctbm01.UserCd` column can hold.
pub const MAX_USER_CODE_LEN: usize = 10;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (legacy user code).
    pub sub: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_code: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_code.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user code from claims.
    #[must_use]
    pub fn user_code(&self) -> &str {
        &self.sub
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// User code (`UserCd`).
    pub usuario: String,
    /// Plaintext secret (`UserLlave`).
    pub password: String,
}

impl LoginRequest {
    /// Checks the request shape before touching the database.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first violated rule.
    pub fn validate(&self) -> Result<(), String> {
        if self.usuario.trim().is_empty() {
            return Err("usuario is required".to_string());
        }
        if self.usuario.chars().count() > MAX_USER_CODE_LEN {
            return Err(format!(
                "usuario must be at most {MAX_USER_CODE_LEN} characters"
            ));
        }
        if self.password.is_empty() {
            return Err("password is required".to_string());
        }
        Ok(())
    }
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: &'static str,
    /// User code.
    pub usuario: String,
    /// Display name.
    pub nombre: String,
    /// Token expiration in seconds.
    pub expires_in: i64,
}

impl LoginResponse {
    /// Creates a bearer login response.
    #[must_use]
    pub fn bearer(access_token: String, usuario: String, nombre: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            usuario,
            nombre,
            expires_in,
        }
    }
}
