//! OAuth2 target configuration
//!
//! The installed scheme's URLs, scope, and component key are plain
//! configuration so the same engine serves other OAuth2 targets.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use url::Url;

use crate::error::MigrateResult;

/// Configuration for the installed OAuth2 Authorization-Code scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    /// Authorization endpoint of the gateway
    pub authorization_url: Url,
    /// Token endpoint of the gateway
    pub token_url: Url,
    /// The single scope granted by the new scheme
    pub scope_name: String,
    /// Human description of the scope
    pub scope_description: String,
    /// Component key the scheme is installed under
    pub scheme_key: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            authorization_url: Url::parse("https://login.example.com/authorize").unwrap(),
            token_url: Url::parse("https://login.example.com/token").unwrap(),
            scope_name: "sampleapp.weather.read".to_string(),
            scope_description: "Read access to the APIs".to_string(),
            scheme_key: "oauth2".to_string(),
        }
    }
}

impl OAuthConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> MigrateResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: OAuthConfig = serde_json::from_str(&contents)?;
        debug!("Loaded OAuth2 config from {:?}", path);
        Ok(config)
    }
}
