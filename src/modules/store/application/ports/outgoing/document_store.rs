use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// Collections
// ──────────────────────────────────────────────────────────
//

/// Named collections of the content store. The legacy singular
/// `experience` collection is historical and not served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Personal,
    Experiences,
    Education,
    Certifications,
    Skills,
    Projects,
    Settings,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Personal => "personal",
            Collection::Experiences => "experiences",
            Collection::Education => "education",
            Collection::Certifications => "certifications",
            Collection::Skills => "skills",
            Collection::Projects => "projects",
            Collection::Settings => "settings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

//
// ──────────────────────────────────────────────────────────
// Documents
// ──────────────────────────────────────────────────────────
//

/// An untyped document as the store hands it out. Typed mapping
/// happens one layer up, at the per-collection record boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Document CRUD against named collections. `set` is a full
/// overwrite of the target id (upsert); partial updates do not
/// exist at this level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError>;

    /// Full collection ordered by a top-level field of the payload.
    /// Documents missing the field sort last regardless of direction.
    async fn list(
        &self,
        collection: Collection,
        order_field: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, StoreError>;

    async fn set(&self, collection: Collection, id: &str, data: Value) -> Result<(), StoreError>;

    /// Atomic multi-document overwrite: either every document in the
    /// batch lands or none does.
    async fn set_many(&self, collection: Collection, docs: Vec<Document>)
        -> Result<(), StoreError>;

    /// Returns whether a document existed and was removed.
    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError>;

    async fn count(&self, collection: Collection) -> Result<u64, StoreError>;
}
