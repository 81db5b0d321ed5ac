//! Shared types, errors, and configuration for the approvals API.
//!
//! This crate provides common types used across all other crates:
//! - Pagination and date-range query types for list endpoints
//! - Application-wide error types
//! - Configuration management
//! - JWT issuing and validation for the token guard

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;


pub use auth::Claims;
pub use config::AppConfig;
pub use error::AppError;
pub use jwt::{JwtError, JwtService, TokenConfig};
