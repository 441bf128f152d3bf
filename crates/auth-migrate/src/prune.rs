//! Removal of classified API-key schemes and their requirements

use indexmap::IndexMap;
use openapi_doc::Document;
use tracing::debug;

use crate::classify::ApiKeyScheme;

/// Delete classified schemes from components and every top-level
/// requirement that references any of them
///
/// Both removals read the frozen classification, so their order does
/// not matter. A requirement is dropped whole if any of its scheme-ids
/// is classified. Absent collections are no-ops.
/// Returns (schemes removed, requirements removed).
pub fn prune(doc: &mut Document, schemes: &IndexMap<String, ApiKeyScheme>) -> (usize, usize) {
    let mut schemes_removed = 0;
    if let Some(components) = doc.components.as_mut() {
        for scheme_id in schemes.keys() {
            if components.security_schemes.shift_remove(scheme_id).is_some() {
                schemes_removed += 1;
            }
        }
    }

    let before = doc.security.len();
    doc.security
        .retain(|req| !req.scheme_ids().any(|id| schemes.contains_key(id)));
    let requirements_removed = before - doc.security.len();

    debug!(
        "Pruned {} scheme(s), {} requirement(s)",
        schemes_removed, requirements_removed
    );
    (schemes_removed, requirements_removed)
}
