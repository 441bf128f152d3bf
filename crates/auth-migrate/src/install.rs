//! Installation of the OAuth2 Authorization-Code scheme

use indexmap::IndexMap;
use openapi_doc::{Document, OAuth2Flow, OAuth2Flows, SecurityRequirement, SecurityScheme};
use tracing::debug;

use crate::config::OAuthConfig;
use crate::error::{MigrateError, MigrateResult};

/// Install the configured OAuth2 scheme and its global requirement
///
/// Fails fast if the configured key is still occupied after pruning:
/// a collision there is an operator mistake, not something to paper
/// over with an overwrite. Pre-existing requirements that survived the
/// pruner stay in the list; the new requirement is additive.
pub fn install_oauth2(doc: &mut Document, config: &OAuthConfig) -> MigrateResult<()> {
    let components = doc.components_mut();
    if components.security_schemes.contains_key(&config.scheme_key) {
        return Err(MigrateError::SchemeCollision {
            key: config.scheme_key.clone(),
        });
    }

    let mut scopes = IndexMap::new();
    scopes.insert(config.scope_name.clone(), config.scope_description.clone());

    components.security_schemes.insert(
        config.scheme_key.clone(),
        SecurityScheme::OAuth2 {
            flows: OAuth2Flows {
                authorization_code: Some(OAuth2Flow {
                    authorization_url: Some(config.authorization_url.to_string()),
                    token_url: Some(config.token_url.to_string()),
                    refresh_url: None,
                    scopes,
                    extra: IndexMap::new(),
                }),
                ..OAuth2Flows::default()
            },
            description: Some("OAuth2 Bearer Token".to_string()),
            extra: IndexMap::new(),
        },
    );

    doc.security.push(SecurityRequirement::single(
        &config.scheme_key,
        vec![config.scope_name.clone()],
    ));

    debug!("Installed OAuth2 scheme under key {:?}", config.scheme_key);
    Ok(())
}
