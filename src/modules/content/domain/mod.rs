pub mod certification;
pub mod dates;
pub mod education;
pub mod experience;
pub mod images;
pub mod personal;
pub mod project;
pub mod skill;

mod validation;

pub use validation::FieldError;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction,
};

/// A typed per-collection record: the shape a document takes once it
/// crosses the store boundary. Serialization defines the stored
/// payload bit-exactly (camelCase field names, RFC 3339 dates).
pub trait ContentRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const COLLECTION: Collection;
    const ORDER_FIELD: &'static str;
    const ORDER_DIRECTION: Direction;
}

/// The editable form shape of a record: strings for dates, raw field
/// values as typed into the admin form. `normalize` runs the form's
/// validation and produces the stored record, or the full set of
/// per-field errors.
pub trait ContentDraft: Send + Sync + 'static {
    type Record: ContentRecord;

    /// `existing` carries the previously stored record in edit mode,
    /// for fields that are set once (project `createdAt`).
    fn normalize(self, existing: Option<&Self::Record>) -> Result<Self::Record, Vec<FieldError>>;
}

/// Document ids for created records are millisecond timestamps, as
/// the original admin generated them.
pub fn generated_doc_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Tag-style multi-value fields: trim entries, drop empties, drop
/// duplicates while preserving first-occurrence order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || seen.iter().any(|t| t == tag) {
            continue;
        }
        seen.push(tag.to_string());
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags_is_idempotent_under_duplicates() {
        let tags = vec![
            "AutoCAD".to_string(),
            "  AutoCAD ".to_string(),
            "Revit".to_string(),
            "AutoCAD".to_string(),
        ];

        assert_eq!(normalize_tags(tags), vec!["AutoCAD", "Revit"]);
    }

    #[test]
    fn test_normalize_tags_drops_empty_entries_and_keeps_order() {
        let tags = vec![
            "SketchUp".to_string(),
            "   ".to_string(),
            "Lumion".to_string(),
        ];

        assert_eq!(normalize_tags(tags), vec!["SketchUp", "Lumion"]);
    }

    #[test]
    fn test_generated_doc_id_is_numeric_timestamp() {
        let id = generated_doc_id();
        assert!(id.parse::<i64>().is_ok());
        assert!(id.len() >= 13);
    }
}
