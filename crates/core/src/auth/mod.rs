//! Legacy credential check.
//!
//! `ctbm01.UserLlave` stores the secret in clear text inside a padded `CHAR`
//! column. Comparison ignores the trailing padding and runs in time
//! independent of where the first mismatch is.

use subtle::ConstantTimeEq;
use thiserror::Error;

/// Credential check errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Unknown user or wrong secret. The two cases are indistinguishable.
    #[error("Invalid user or password")]
    InvalidCredentials,
}

impl CredentialError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
        }
    }
}

/// Compares a stored secret against the submitted one.
///
/// `stored` is `None` when no user row matched; the submitted secret is still
/// compared against an empty value so both failures take the same path.
pub fn verify_secret(stored: Option<&str>, submitted: &str) -> Result<(), CredentialError> {
    let found = stored.is_some();
    let stored = stored.map_or("", str::trim_end);

    let matches: bool = stored.as_bytes().ct_eq(submitted.as_bytes()).into();
    if matches && found {
        Ok(())
    } else {
        Err(CredentialError::InvalidCredentials)
    }
}
