//! Classification of API-key security schemes

use indexmap::IndexMap;
use openapi_doc::{ApiKeyLocation, Document, SecurityScheme};
use tracing::debug;

/// An API-key scheme lifted out of the components registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyScheme {
    /// Wire name of the credential (header/query/cookie key)
    pub name: String,
    pub location: ApiKeyLocation,
}

/// Collect the API-key entries from the document's security schemes
///
/// Absent or empty components yield an empty map. Pure read; the
/// returned map is the frozen classification both the injector and the
/// pruner work from.
pub fn api_key_schemes(doc: &Document) -> IndexMap<String, ApiKeyScheme> {
    let Some(schemes) = doc.security_schemes() else {
        return IndexMap::new();
    };

    let classified: IndexMap<String, ApiKeyScheme> = schemes
        .iter()
        .filter_map(|(id, scheme)| match scheme {
            SecurityScheme::ApiKey { name, location, .. } => Some((
                id.clone(),
                ApiKeyScheme {
                    name: name.clone(),
                    location: *location,
                },
            )),
            _ => None,
        })
        .collect();

    debug!("Classified {} API-key scheme(s)", classified.len());
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_doc::SpecParser;

    #[test]
    fn test_classifies_only_api_key_schemes() {
        let doc = SpecParser::parse_yaml(
            r#"
openapi: "3.0.1"
info:
  title: T
  version: "1"
paths: {}
components:
  securitySchemes:
    subscriptionKey:
      type: apiKey
      name: api-key
      in: header
    queryKey:
      type: apiKey
      name: key
      in: query
    bearerAuth:
      type: http
      scheme: bearer
"#,
        )
        .unwrap();

        let schemes = api_key_schemes(&doc);
        assert_eq!(schemes.len(), 2);
        assert_eq!(schemes["subscriptionKey"].name, "api-key");
        assert_eq!(schemes["subscriptionKey"].location, ApiKeyLocation::Header);
        assert_eq!(schemes["queryKey"].location, ApiKeyLocation::Query);
        assert!(!schemes.contains_key("bearerAuth"));
    }

    #[test]
    fn test_absent_components_is_empty() {
        let doc = SpecParser::parse_yaml(
            r#"
openapi: "3.0.1"
info:
  title: T
  version: "1"
paths: {}
"#,
        )
        .unwrap();

        assert!(api_key_schemes(&doc).is_empty());
    }
}
