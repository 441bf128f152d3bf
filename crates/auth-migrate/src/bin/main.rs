//! auth-migrate CLI - one-shot OpenAPI security migration
//!
//! Reads a spec, rewrites its security model, and writes
//! `<stem>_modified.yaml` next to the input. Exit codes distinguish
//! failure kinds (missing file, parse, collision, serialize, IO).

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use auth_migrate::{run_file, MigrateError, OAuthConfig};

const DEFAULT_INPUT: &str = "openapi.yaml";

/// Migrate an OpenAPI spec from API-key auth to an OAuth2 gateway
#[derive(Parser, Debug)]
#[command(name = "auth-migrate")]
#[command(version)]
#[command(about = "Rewrites API-key security schemes as optional parameters behind OAuth2")]
struct Args {
    /// Path to the OpenAPI spec (YAML or JSON)
    input: Option<PathBuf>,

    /// JSON file overriding the OAuth2 target (URLs, scope, scheme key)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    info!("Migrating spec at {:?}", input);

    let config = match &args.config {
        Some(path) => match OAuthConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                std::process::exit(e.exit_code());
            }
        },
        None => OAuthConfig::default(),
    };

    match run_file(&input, &config) {
        Ok(outcome) => {
            let report = outcome.report;
            info!(
                "{} API-key scheme(s) rewritten as optional parameters",
                report.api_key_schemes
            );
            info!("{} parameter(s) added to operations", report.parameters_injected);
            info!(
                "{} scheme(s) and {} requirement(s) removed",
                report.schemes_removed, report.requirements_removed
            );
            info!("OAuth2 scheme installed; output at {:?}", outcome.output_path);
        }
        Err(e) => {
            error!("{}", e);
            if matches!(e, MigrateError::FileNotFound(_)) {
                eprintln!("Usage: auth-migrate [INPUT] [--config <FILE>]");
            }
            std::process::exit(e.exit_code());
        }
    }
}
