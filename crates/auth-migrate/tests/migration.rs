//! File-level migration tests: load, transform, save

use std::path::Path;

use auth_migrate::{run_file, MigrateError, OAuthConfig};
use openapi_doc::{ParameterLocation, SecurityScheme, SpecParser};

const WEATHER_SPEC: &str = r#"
openapi: "3.0.1"
info:
  title: Weather Forecast
  version: "1.0"
servers:
  - url: https://weather.example.com/v1
paths:
  /weather:
    get:
      operationId: getWeather
      responses:
        '200':
          description: Forecast
components:
  securitySchemes:
    subscriptionKey:
      type: apiKey
      name: api-key
      in: header
security:
  - subscriptionKey: []
"#;

#[test]
fn migrates_spec_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("weather.yaml");
    std::fs::write(&input, WEATHER_SPEC).unwrap();

    let outcome = run_file(&input, &OAuthConfig::default()).unwrap();

    assert_eq!(outcome.output_path, dir.path().join("weather_modified.yaml"));
    assert_eq!(outcome.report.api_key_schemes, 1);
    assert_eq!(outcome.report.parameters_injected, 1);

    // The written file parses back with the migrated security model
    let written = std::fs::read_to_string(&outcome.output_path).unwrap();
    let doc = SpecParser::parse_yaml(&written).unwrap();

    let get = doc.paths["/weather"].get.as_ref().unwrap();
    assert_eq!(get.parameters.len(), 1);
    assert!(get.parameters[0].occupies("api-key", ParameterLocation::Header));
    assert!(!get.parameters[0].required);

    let schemes = doc.security_schemes().unwrap();
    assert!(!schemes.contains_key("subscriptionKey"));
    assert!(matches!(schemes["oauth2"], SecurityScheme::OAuth2 { .. }));

    assert_eq!(doc.security.len(), 1);
    assert!(doc.security[0].references("oauth2"));

    // Untouched fields survive the round trip
    assert!(doc.extra.contains_key("servers"));
    assert_eq!(
        get.extra["operationId"],
        serde_yaml::Value::String("getWeather".to_string())
    );
}

#[test]
fn custom_config_controls_the_installed_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("weather.yaml");
    std::fs::write(&input, WEATHER_SPEC).unwrap();
    let config_path = dir.path().join("oauth.json");
    std::fs::write(
        &config_path,
        r#"{
            "authorizationUrl": "https://id.corp.example/authorize",
            "tokenUrl": "https://id.corp.example/token",
            "scopeName": "weather.read",
            "scopeDescription": "Read forecasts",
            "schemeKey": "gatewayOAuth"
        }"#,
    )
    .unwrap();
    let config = OAuthConfig::load(&config_path).unwrap();

    let outcome = run_file(&input, &config).unwrap();

    let written = std::fs::read_to_string(&outcome.output_path).unwrap();
    let doc = SpecParser::parse_yaml(&written).unwrap();
    let schemes = doc.security_schemes().unwrap();
    match &schemes["gatewayOAuth"] {
        SecurityScheme::OAuth2 { flows, .. } => {
            let flow = flows.authorization_code.as_ref().unwrap();
            assert_eq!(
                flow.token_url.as_deref(),
                Some("https://id.corp.example/token")
            );
            assert!(flow.scopes.contains_key("weather.read"));
        }
        other => panic!("Expected oauth2 scheme, got {:?}", other),
    }
    assert!(doc.security[0].references("gatewayOAuth"));
}

#[test]
fn missing_input_reports_file_not_found_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.yaml");

    let err = run_file(&input, &OAuthConfig::default()).unwrap_err();

    assert!(matches!(err, MigrateError::FileNotFound(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(!dir.path().join("nope_modified.yaml").exists());
}

#[test]
fn parse_failure_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.yaml");
    std::fs::write(&input, "openapi: [not, a, version").unwrap();

    let err = run_file(&input, &OAuthConfig::default()).unwrap_err();

    assert!(matches!(err, MigrateError::Parse(_)));
    assert!(!dir.path().join("broken_modified.yaml").exists());
}

#[test]
fn collision_aborts_before_saving() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("occupied.yaml");
    std::fs::write(
        &input,
        r#"
openapi: "3.0.1"
info:
  title: T
  version: "1"
paths: {}
components:
  securitySchemes:
    oauth2:
      type: http
      scheme: bearer
"#,
    )
    .unwrap();

    let err = run_file(&input, &OAuthConfig::default()).unwrap_err();

    assert!(matches!(err, MigrateError::SchemeCollision { .. }));
    assert_eq!(err.exit_code(), 4);
    assert!(!dir.path().join("occupied_modified.yaml").exists());
}

#[test]
fn output_lands_next_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("specs");
    std::fs::create_dir(&nested).unwrap();
    let input = nested.join("api.openapi.yaml");
    std::fs::write(&input, WEATHER_SPEC).unwrap();

    let outcome = run_file(&input, &OAuthConfig::default()).unwrap();

    assert_eq!(
        outcome.output_path,
        Path::new(&nested).join("api.openapi_modified.yaml")
    );
}
