//! YAML serialization of documents
//!
//! No transformation logic lives here: untouched fields round-trip
//! through the model's flatten maps.

use crate::types::Document;
use std::path::Path;
use tracing::debug;

/// Serialize a document to its canonical YAML form
pub fn to_yaml_string(doc: &Document) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(doc)
}

/// Serialize a document and write it to `path`
pub fn write_yaml(doc: &Document, path: &Path) -> std::io::Result<()> {
    let yaml = to_yaml_string(doc)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, yaml)?;
    debug!("Wrote document to {:?}", path);
    Ok(())
}
