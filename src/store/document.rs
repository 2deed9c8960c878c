//! Document and patch model.

use serde_json::{Map, Value};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};

/// Store-assigned document identifier
pub type DocumentId = Uuid;

/// A document read back from the store, with its generated id merged in.
///
/// The id lives outside `data`; it is never persisted inside the document
/// payload itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub data: Value,
}

/// Decoding of typed models from raw documents.
pub trait FromDocument: Sized {
    fn from_document(doc: &Document) -> Result<Self, serde_json::Error>;
}

/// Apply a partial patch to a document payload.
///
/// The patch must be a JSON object. Top-level keys may be dotted field paths
/// (`"gameState.winner"`), which set a nested field and create intermediate
/// objects as needed. Plain keys replace the field wholesale.
pub(crate) fn apply_patch(data: &mut Value, patch: &Value) -> StoreResult<()> {
    let Some(fields) = patch.as_object() else {
        return Err(StoreError::InvalidPatch);
    };
    let Some(target) = data.as_object_mut() else {
        return Err(StoreError::InvalidPatch);
    };
    for (path, value) in fields {
        set_field_path(target, path, value.clone());
    }
    Ok(())
}

fn set_field_path(map: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            map.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            // A scalar in the way of a nested path is replaced by an object.
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_field_path(nested, rest, value);
            }
        }
    }
}
