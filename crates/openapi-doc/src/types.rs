//! Mutable document model for OpenAPI 3.x specs
//!
//! Only the parts of the spec the security migration touches are modeled
//! as typed fields. Everything else round-trips untouched through
//! `#[serde(flatten)]` maps, so serialization reproduces fields this
//! crate never looked at.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Parameter location in an HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

/// API key location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
    Cookie,
}

/// A parameter on an API operation
///
/// `name` and `location` are optional because a list entry may be a
/// `$ref` into `components/parameters`, which carries neither inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Reference to a parameter in components/parameters
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
    #[serde(default)]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Parameter {
    /// Build an optional string-typed parameter
    pub fn optional_string(
        name: impl Into<String>,
        location: ParameterLocation,
        description: impl Into<String>,
    ) -> Self {
        Self {
            reference: None,
            name: Some(name.into()),
            location: Some(location),
            required: false,
            description: Some(description.into()),
            schema: Some(string_schema()),
            extra: IndexMap::new(),
        }
    }

    /// Whether this parameter occupies the given (name, location) slot
    pub fn occupies(&self, name: &str, location: ParameterLocation) -> bool {
        self.name.as_deref() == Some(name) && self.location == Some(location)
    }
}

/// JSON Schema for a plain string value
pub fn string_schema() -> Value {
    let mut schema = serde_yaml::Mapping::new();
    schema.insert(
        Value::String("type".to_string()),
        Value::String("string".to_string()),
    );
    Value::Mapping(schema)
}

/// One HTTP-method-specific action on a path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A path entry with up to one operation per HTTP method
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PathItem {
    /// Iterate over the operations that are present, in method order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        [
            self.get.as_ref(),
            self.post.as_ref(),
            self.put.as_ref(),
            self.patch.as_ref(),
            self.delete.as_ref(),
            self.head.as_ref(),
            self.options.as_ref(),
            self.trace.as_ref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Mutable variant of [`operations`](Self::operations)
    pub fn operations_mut(&mut self) -> impl Iterator<Item = &mut Operation> {
        [
            self.get.as_mut(),
            self.post.as_mut(),
            self.put.as_mut(),
            self.patch.as_mut(),
            self.delete.as_mut(),
            self.head.as_mut(),
            self.options.as_mut(),
            self.trace.as_mut(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Security scheme definition, tagged by the OpenAPI `type` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    /// API key authentication
    #[serde(rename = "apiKey")]
    ApiKey {
        name: String,
        #[serde(rename = "in")]
        location: ApiKeyLocation,
        #[serde(flatten)]
        extra: IndexMap<String, Value>,
    },
    /// HTTP authentication (bearer, basic)
    #[serde(rename = "http")]
    Http {
        scheme: String,
        #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
        bearer_format: Option<String>,
        #[serde(flatten)]
        extra: IndexMap<String, Value>,
    },
    /// OAuth2 authentication
    #[serde(rename = "oauth2")]
    OAuth2 {
        flows: OAuth2Flows,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(flatten)]
        extra: IndexMap<String, Value>,
    },
    /// OpenID Connect
    #[serde(rename = "openIdConnect")]
    OpenIdConnect {
        #[serde(rename = "openIdConnectUrl")]
        openid_connect_url: String,
        #[serde(flatten)]
        extra: IndexMap<String, Value>,
    },
}

impl SecurityScheme {
    pub fn is_api_key(&self) -> bool {
        matches!(self, SecurityScheme::ApiKey { .. })
    }
}

/// OAuth2 flow set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuth2Flows {
    #[serde(rename = "authorizationCode", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuth2Flow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuth2Flow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuth2Flow>,
    #[serde(rename = "clientCredentials", skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuth2Flow>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// One OAuth2 flow
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuth2Flow {
    #[serde(rename = "authorizationUrl", skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(rename = "tokenUrl", skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(rename = "refreshUrl", skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub scopes: IndexMap<String, String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Shared components registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, SecurityScheme>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A security requirement: every listed (scheme-id, scopes) pair must
/// be satisfied for the requirement to authorize a call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement(pub IndexMap<String, Vec<String>>);

impl SecurityRequirement {
    /// Requirement over a single scheme
    pub fn single(scheme_id: impl Into<String>, scopes: Vec<String>) -> Self {
        let mut map = IndexMap::new();
        map.insert(scheme_id.into(), scopes);
        Self(map)
    }

    /// Whether any referenced scheme-id equals `scheme_id`
    pub fn references(&self, scheme_id: &str) -> bool {
        self.0.contains_key(scheme_id)
    }

    pub fn scheme_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Root of a parsed OpenAPI document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub openapi: String,
    pub info: Value,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Document {
    /// Security schemes declared in components, if any
    pub fn security_schemes(&self) -> Option<&IndexMap<String, SecurityScheme>> {
        self.components.as_ref().map(|c| &c.security_schemes)
    }

    /// Components registry, created on first use
    pub fn components_mut(&mut self) -> &mut Components {
        self.components.get_or_insert_with(Components::default)
    }
}
