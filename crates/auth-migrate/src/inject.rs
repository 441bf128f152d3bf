//! Injection of API-key parameters onto operations

use indexmap::IndexMap;
use openapi_doc::{ApiKeyLocation, Document, Parameter, ParameterLocation};
use tracing::debug;

use crate::classify::ApiKeyScheme;

/// Where the replacement parameter for an API key goes
///
/// Cookie-located keys intentionally collapse into query parameters:
/// introducing a cookie parameter would change client behavior, while a
/// query parameter keeps the credential caller-suppliable.
pub fn parameter_location(location: ApiKeyLocation) -> ParameterLocation {
    match location {
        ApiKeyLocation::Header => ParameterLocation::Header,
        ApiKeyLocation::Query => ParameterLocation::Query,
        ApiKeyLocation::Cookie => ParameterLocation::Query,
    }
}

/// Ensure every operation carries an optional parameter per classified scheme
///
/// Idempotent: an operation that already has a parameter in the same
/// (name, location) slot is left alone, existing fields included.
/// Returns the number of parameters appended.
pub fn inject_parameters(
    doc: &mut Document,
    schemes: &IndexMap<String, ApiKeyScheme>,
) -> usize {
    let mut injected = 0;

    for path_item in doc.paths.values_mut() {
        for operation in path_item.operations_mut() {
            for (scheme_id, scheme) in schemes {
                let location = parameter_location(scheme.location);
                let exists = operation
                    .parameters
                    .iter()
                    .any(|p| p.occupies(&scheme.name, location));
                if exists {
                    continue;
                }

                operation.parameters.push(Parameter::optional_string(
                    &scheme.name,
                    location,
                    format!("API subscription key ({})", scheme_id),
                ));
                injected += 1;
            }
        }
    }

    debug!("Injected {} parameter(s)", injected);
    injected
}
