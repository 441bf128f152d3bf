//! # auth-migrate
//!
//! Migrates API-key-protected OpenAPI specs behind an OAuth2 gateway:
//! - API-key security schemes become optional request parameters on
//!   every operation (backward-compatible, caller-supplied)
//! - the old schemes and their global requirements are pruned
//! - one OAuth2 Authorization-Code scheme becomes the declared
//!   authentication mechanism

pub mod classify;
pub mod config;
pub mod error;
pub mod inject;
pub mod install;
pub mod pipeline;
pub mod prune;

pub use classify::{api_key_schemes, ApiKeyScheme};
pub use config::OAuthConfig;
pub use error::{MigrateError, MigrateResult};
pub use pipeline::{run_file, transform, MigrationOutcome, MigrationReport};
