//! # openapi-doc
//!
//! OpenAPI 3.x document model for the security migration tool.
//! Parses specs into a mutable object graph and serializes them back to
//! YAML, round-tripping every field the migration does not touch.

mod error;
mod parser;
pub mod serializer;
mod types;

pub use error::{ParseError, ParseResult};
pub use parser::SpecParser;
pub use types::*;
