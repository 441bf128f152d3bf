//! OpenAPI document parser

use crate::error::{ParseError, ParseResult};
use crate::types::Document;
use regex::Regex;
use tracing::debug;

/// OpenAPI 3.x parser
pub struct SpecParser;

impl SpecParser {
    /// Parse an OpenAPI spec from a string (auto-detects JSON/YAML)
    pub fn parse(content: &str) -> ParseResult<Document> {
        let content = Self::sanitize_large_numbers(content);

        // Try JSON first, then YAML
        let doc: Document = if content.trim().starts_with('{') {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        Self::check_version(doc)
    }

    /// Parse an OpenAPI spec from JSON
    pub fn parse_json(content: &str) -> ParseResult<Document> {
        let content = Self::sanitize_large_numbers(content);
        let doc: Document = serde_json::from_str(&content)?;
        Self::check_version(doc)
    }

    /// Parse an OpenAPI spec from YAML
    pub fn parse_yaml(content: &str) -> ParseResult<Document> {
        let content = Self::sanitize_large_numbers(content);
        let doc: Document = serde_yaml::from_str(&content)?;
        Self::check_version(doc)
    }

    fn check_version(doc: Document) -> ParseResult<Document> {
        if !doc.openapi.starts_with("3.") {
            return Err(ParseError::UnsupportedVersion(doc.openapi));
        }
        debug!(
            "Parsed OpenAPI {} document with {} paths",
            doc.openapi,
            doc.paths.len()
        );
        Ok(doc)
    }

    /// Sanitize large numbers that may cause parsing issues
    ///
    /// Some published specs use 64-bit-overflowing integers for min/max
    /// constraints, which serde_yaml rejects with "JSON number out of
    /// range". The exact value does not matter for this tool, so clamp
    /// anything over 15 digits.
    fn sanitize_large_numbers(content: &str) -> String {
        let re_large = Regex::new(
            r"(?m)^(\s*(?:minimum|maximum|exclusiveMinimum|exclusiveMaximum):\s*)(-?\d{16,})",
        )
        .unwrap();
        let content = re_large.replace_all(content, |caps: &regex::Captures| {
            let prefix = &caps[1];
            if caps[2].starts_with('-') {
                format!("{}-2147483648", prefix)
            } else {
                format!("{}2147483647", prefix)
            }
        });

        content.into_owned()
    }
}
