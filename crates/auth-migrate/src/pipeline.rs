//! The migration pipeline
//!
//! Strictly sequential over one document: classify API-key schemes,
//! inject replacement parameters, prune the old schemes and their
//! requirements, install the OAuth2 scheme. File loading and saving
//! wrap the in-memory stages; partial output is never written.

use std::path::{Path, PathBuf};

use openapi_doc::{serializer, Document, SpecParser};
use tracing::info;

use crate::classify;
use crate::config::OAuthConfig;
use crate::error::{MigrateError, MigrateResult};
use crate::inject;
use crate::install;
use crate::prune;

/// Counts reported after a migration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// API-key schemes found in the input
    pub api_key_schemes: usize,
    /// Parameters appended across all operations
    pub parameters_injected: usize,
    /// Schemes deleted from components
    pub schemes_removed: usize,
    /// Top-level requirements deleted
    pub requirements_removed: usize,
}

/// Result of a file-level run
#[derive(Debug)]
pub struct MigrationOutcome {
    pub report: MigrationReport,
    pub output_path: PathBuf,
}

/// Run the in-memory transformation stages on one document
pub fn transform(doc: &mut Document, config: &OAuthConfig) -> MigrateResult<MigrationReport> {
    let schemes = classify::api_key_schemes(doc);
    let parameters_injected = inject::inject_parameters(doc, &schemes);
    let (schemes_removed, requirements_removed) = prune::prune(doc, &schemes);
    install::install_oauth2(doc, config)?;

    Ok(MigrationReport {
        api_key_schemes: schemes.len(),
        parameters_injected,
        schemes_removed,
        requirements_removed,
    })
}

/// Output path: same directory as the input, `<stem>_modified.yaml`
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_modified.yaml", stem))
}

/// Load, transform, and save one spec file
pub fn run_file(input: &Path, config: &OAuthConfig) -> MigrateResult<MigrationOutcome> {
    if !input.exists() {
        return Err(MigrateError::FileNotFound(input.to_path_buf()));
    }

    let contents = std::fs::read_to_string(input)?;
    let mut doc = SpecParser::parse(&contents)?;
    info!("Read spec from {:?}", input);

    let report = transform(&mut doc, config)?;

    let output_path = output_path_for(input);
    let yaml = serializer::to_yaml_string(&doc)?;
    std::fs::write(&output_path, yaml)?;
    info!("Wrote migrated spec to {:?}", output_path);

    Ok(MigrationOutcome {
        report,
        output_path,
    })
}
