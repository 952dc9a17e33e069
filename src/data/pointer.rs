// ABOUTME: RFC 6901 JSON pointer resolution over loaded data documents
// ABOUTME: Splits resolution failures into syntax and lookup errors

use serde_json::Value as JsonValue;

use super::error::PointerError;

/// Resolve an RFC 6901 pointer against a document. The empty pointer refers
/// to the document itself; any other pointer must start with '/'.
pub fn resolve_pointer<'a>(
    doc: &'a JsonValue,
    pointer: &str,
) -> std::result::Result<&'a JsonValue, PointerError> {
    if pointer.is_empty() {
        return Ok(doc);
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::Syntax {
            pointer: pointer.to_string(),
        });
    }
    doc.pointer(pointer).ok_or_else(|| PointerError::NotFound {
        pointer: pointer.to_string(),
    })
}
