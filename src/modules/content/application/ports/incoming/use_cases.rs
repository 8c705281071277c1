use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::modules::content::domain::skill::SkillRecord;
use crate::modules::content::domain::{ContentDraft, ContentRecord, FieldError};

//
// ──────────────────────────────────────────────────────────
// Results
// ──────────────────────────────────────────────────────────
//

/// A record together with its document id, as handed to the web
/// layer. Flattening keeps the JSON shape the admin UI always had:
/// the id sits next to the record's own fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<R> {
    pub id: String,
    #[serde(flatten)]
    pub record: R,
}

impl<R: ContentRecord> Stored<R> {
    pub fn new(id: impl Into<String>, record: R) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}

/// Collection sizes shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub counts: BTreeMap<&'static str, u64>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum SaveContentError {
    Validation(Vec<FieldError>),
    StoreError(String),
}

impl fmt::Display for SaveContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveContentError::Validation(errors) => {
                write!(f, "validation failed on {} field(s)", errors.len())
            }
            SaveContentError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetContentError {
    NotFound,
    StoreError(String),
}

impl fmt::Display for GetContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetContentError::NotFound => write!(f, "document not found"),
            GetContentError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ListContentError {
    StoreError(String),
}

impl fmt::Display for ListContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListContentError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteContentError {
    NotFound,
    StoreError(String),
}

impl fmt::Display for DeleteContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteContentError::NotFound => write!(f, "document not found"),
            DeleteContentError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ReorderSkillsError {
    /// The submitted id set does not match the stored skills.
    UnknownIds(Vec<String>),
    StoreError(String),
}

impl fmt::Display for ReorderSkillsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderSkillsError::UnknownIds(ids) => {
                write!(f, "unknown skill ids: {}", ids.join(", "))
            }
            ReorderSkillsError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DashboardError {
    StoreError(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

/// Create or overwrite a record. With `id` absent a fresh document id
/// is generated; with `id` present the target document is replaced in
/// place, and its previous value informs set-once fields.
#[async_trait]
pub trait SaveContentUseCase<D: ContentDraft>: Send + Sync {
    async fn execute(
        &self,
        id: Option<String>,
        draft: D,
    ) -> Result<Stored<D::Record>, SaveContentError>;
}

#[async_trait]
pub trait GetContentUseCase<R: ContentRecord>: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Stored<R>, GetContentError>;
}

/// Full collection in its designated display order.
#[async_trait]
pub trait ListContentUseCase<R: ContentRecord>: Send + Sync {
    async fn execute(&self) -> Result<Vec<Stored<R>>, ListContentError>;
}

#[async_trait]
pub trait DeleteContentUseCase<R: ContentRecord>: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteContentError>;
}

/// Rewrite every skill's `order` field from its position in the
/// submitted id sequence, in one atomic batch.
#[async_trait]
pub trait ReorderSkillsUseCase: Send + Sync {
    async fn execute(
        &self,
        ordered_ids: Vec<String>,
    ) -> Result<Vec<Stored<SkillRecord>>, ReorderSkillsError>;
}

#[async_trait]
pub trait GetDashboardSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardSummary, DashboardError>;
}
