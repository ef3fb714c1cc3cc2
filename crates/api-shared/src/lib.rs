//! # API Shared
//!
//! Shared definitions for the TheraBot APIs.
//!
//! Contains:
//! - Request and response payloads (`types` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and any future front end that needs the same wire shapes.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
