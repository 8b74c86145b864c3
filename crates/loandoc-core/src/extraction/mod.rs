//! Field extraction from raw document text.

pub mod rules;

pub use rules::{extractor_for, FieldExtractor};

use std::borrow::Cow;

use tracing::debug;

use crate::models::fields::{FieldKind, FieldMap};
use rules::patterns::LINE_BREAK;

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(text, "\n")
}

/// Extract every field kind from document text.
///
/// The result always holds all seven kinds; a field that could not be
/// located carries the `Not found` sentinel. The same text always yields
/// the same map.
pub fn extract_fields(text: &str) -> FieldMap {
    let text = normalize_line_endings(text);

    let fields: FieldMap = FieldKind::ALL
        .into_iter()
        .map(|kind| (kind, extractor_for(kind).extract(&text)))
        .collect();

    debug!(
        "Located {}/{} fields",
        fields.values().filter(|v| v.is_found()).count(),
        fields.len()
    );

    fields
}
