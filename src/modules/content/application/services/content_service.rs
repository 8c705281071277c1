use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentError, DeleteContentUseCase, GetContentError, GetContentUseCase,
    ListContentError, ListContentUseCase, SaveContentError, SaveContentUseCase, Stored,
};
use crate::modules::content::domain::{generated_doc_id, ContentDraft, ContentRecord};
use crate::modules::store::application::ports::outgoing::document_store::{
    Document, DocumentStore, StoreError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// One CRUD service per entity, all stamped from the same mold. The
/// draft type fixes the record, collection, and display ordering.
pub struct ContentService<S, D>
where
    S: DocumentStore,
    D: ContentDraft,
{
    store: Arc<S>,
    _draft: PhantomData<fn() -> D>,
}

impl<S, D> ContentService<S, D>
where
    S: DocumentStore,
    D: ContentDraft,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _draft: PhantomData,
        }
    }
}

fn decode<R: ContentRecord>(doc: Document) -> Result<Stored<R>, StoreError> {
    let record = serde_json::from_value(doc.data)
        .map_err(|e| StoreError::SerializationError(e.to_string()))?;
    Ok(Stored::new(doc.id, record))
}

fn encode<R: ContentRecord>(record: &R) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(record).map_err(|e| StoreError::SerializationError(e.to_string()))
}

#[async_trait]
impl<S, D> SaveContentUseCase<D> for ContentService<S, D>
where
    S: DocumentStore,
    D: ContentDraft,
{
    async fn execute(
        &self,
        id: Option<String>,
        draft: D,
    ) -> Result<Stored<D::Record>, SaveContentError> {
        let store_err = |e: StoreError| SaveContentError::StoreError(e.to_string());

        // Edit mode reads the current value first so set-once fields
        // survive the overwrite.
        let existing: Option<Stored<D::Record>> = match &id {
            Some(id) => self
                .store
                .get(D::Record::COLLECTION, id)
                .await
                .map_err(store_err)?
                .map(decode)
                .transpose()
                .map_err(store_err)?,
            None => None,
        };

        let record = draft
            .normalize(existing.as_ref().map(|s| &s.record))
            .map_err(SaveContentError::Validation)?;

        let id = id.unwrap_or_else(generated_doc_id);
        let data = encode(&record).map_err(store_err)?;
        self.store
            .set(D::Record::COLLECTION, &id, data)
            .await
            .map_err(store_err)?;

        Ok(Stored::new(id, record))
    }
}

#[async_trait]
impl<S, D> GetContentUseCase<D::Record> for ContentService<S, D>
where
    S: DocumentStore,
    D: ContentDraft,
{
    async fn execute(&self, id: &str) -> Result<Stored<D::Record>, GetContentError> {
        let doc = self
            .store
            .get(D::Record::COLLECTION, id)
            .await
            .map_err(|e| GetContentError::StoreError(e.to_string()))?
            .ok_or(GetContentError::NotFound)?;

        decode(doc).map_err(|e| GetContentError::StoreError(e.to_string()))
    }
}

#[async_trait]
impl<S, D> ListContentUseCase<D::Record> for ContentService<S, D>
where
    S: DocumentStore,
    D: ContentDraft,
{
    async fn execute(&self) -> Result<Vec<Stored<D::Record>>, ListContentError> {
        let docs = self
            .store
            .list(
                D::Record::COLLECTION,
                D::Record::ORDER_FIELD,
                D::Record::ORDER_DIRECTION,
            )
            .await
            .map_err(|e| ListContentError::StoreError(e.to_string()))?;

        // All-or-nothing: one undecodable document fails the whole
        // list rather than serving a partial collection.
        docs.into_iter()
            .map(|doc| decode(doc).map_err(|e| ListContentError::StoreError(e.to_string())))
            .collect()
    }
}

#[async_trait]
impl<S, D> DeleteContentUseCase<D::Record> for ContentService<S, D>
where
    S: DocumentStore,
    D: ContentDraft,
{
    async fn execute(&self, id: &str) -> Result<(), DeleteContentError> {
        let removed = self
            .store
            .delete(D::Record::COLLECTION, id)
            .await
            .map_err(|e| DeleteContentError::StoreError(e.to_string()))?;

        if removed {
            Ok(())
        } else {
            Err(DeleteContentError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::modules::content::domain::experience::{ExperienceForm, ExperienceRecord};
    use crate::modules::store::application::ports::outgoing::document_store::{
        Collection, Direction, MockDocumentStore,
    };

    type ExperienceService = ContentService<MockDocumentStore, ExperienceForm>;

    fn valid_form() -> ExperienceForm {
        ExperienceForm {
            position: "Arquitecto".to_string(),
            company: "ACME".to_string(),
            location: "Lima".to_string(),
            description: "Proyectos residenciales".to_string(),
            technologies: vec!["AutoCAD".to_string()],
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            current: true,
        }
    }

    fn stored_json() -> serde_json::Value {
        let record = ExperienceRecord {
            position: "Arquitecto".to_string(),
            company: "ACME".to_string(),
            location: "Lima".to_string(),
            description: "Proyectos residenciales".to_string(),
            technologies: vec!["AutoCAD".to_string()],
            start_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            end_date: None,
            current: true,
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        };
        serde_json::to_value(record).unwrap()
    }

    // =====================================================
    // Save
    // =====================================================

    #[tokio::test]
    async fn test_save_without_id_generates_one_and_writes() {
        let mut store = MockDocumentStore::new();
        store
            .expect_set()
            .withf(|collection, id, data| {
                *collection == Collection::Experiences
                    && id.parse::<i64>().is_ok()
                    && data["position"] == json!("Arquitecto")
                    && data["endDate"] == json!(null)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = ExperienceService::new(Arc::new(store));
        let stored = SaveContentUseCase::execute(&service, None, valid_form())
            .await
            .expect("saves");

        assert!(stored.record.current);
        assert!(stored.record.end_date.is_none());
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites_in_place() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .withf(|collection, id| {
                *collection == Collection::Experiences && id == "1700000000000"
            })
            .times(1)
            .returning(|_, _| Ok(Some(Document::new("1700000000000", stored_json()))));
        store
            .expect_set()
            .withf(|_, id, _| id == "1700000000000")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = ExperienceService::new(Arc::new(store));
        let stored =
            SaveContentUseCase::execute(&service, Some("1700000000000".to_string()), valid_form())
                .await
                .expect("saves");

        assert_eq!(stored.id, "1700000000000");
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_draft_without_touching_store() {
        let store = MockDocumentStore::new();
        let service = ExperienceService::new(Arc::new(store));

        let res = SaveContentUseCase::execute(&service, None, ExperienceForm::default()).await;

        assert!(matches!(res, Err(SaveContentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_save_maps_store_failure() {
        let mut store = MockDocumentStore::new();
        store
            .expect_set()
            .returning(|_, _, _| Err(StoreError::DatabaseError("db down".to_string())));

        let service = ExperienceService::new(Arc::new(store));
        let res = SaveContentUseCase::execute(&service, None, valid_form()).await;

        assert!(matches!(
            res,
            Err(SaveContentError::StoreError(msg)) if msg.contains("db down")
        ));
    }

    // =====================================================
    // Get
    // =====================================================

    #[tokio::test]
    async fn test_get_decodes_stored_document() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(Document::new("1700000000000", stored_json()))));

        let service = ExperienceService::new(Arc::new(store));
        let stored: Stored<ExperienceRecord> =
            GetContentUseCase::execute(&service, "1700000000000")
                .await
                .expect("found");

        assert_eq!(stored.record.company, "ACME");
    }

    #[tokio::test]
    async fn test_get_absent_is_not_found() {
        let mut store = MockDocumentStore::new();
        store.expect_get().returning(|_, _| Ok(None));

        let service = ExperienceService::new(Arc::new(store));
        let res: Result<Stored<ExperienceRecord>, _> =
            GetContentUseCase::execute(&service, "missing").await;

        assert!(matches!(res, Err(GetContentError::NotFound)));
    }

    // =====================================================
    // List
    // =====================================================

    #[tokio::test]
    async fn test_list_queries_designated_order() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .withf(|collection, field, direction| {
                *collection == Collection::Experiences
                    && field == "startDate"
                    && *direction == Direction::Descending
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![Document::new("1700000000000", stored_json())]));

        let service = ExperienceService::new(Arc::new(store));
        let list: Vec<Stored<ExperienceRecord>> =
            ListContentUseCase::execute(&service).await.expect("lists");

        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_list_with_undecodable_document_fails_whole_list() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .returning(|_, _, _| Ok(vec![Document::new("bad", json!({"position": 42}))]));

        let service = ExperienceService::new(Arc::new(store));
        let res: Result<Vec<Stored<ExperienceRecord>>, _> =
            ListContentUseCase::execute(&service).await;

        assert!(matches!(res, Err(ListContentError::StoreError(_))));
    }

    // =====================================================
    // Delete
    // =====================================================

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut store = MockDocumentStore::new();
        store.expect_delete().returning(|_, _| Ok(false));

        let service = ExperienceService::new(Arc::new(store));
        let res = DeleteContentUseCase::<ExperienceRecord>::execute(&service, "missing").await;

        assert!(matches!(res, Err(DeleteContentError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_existing_succeeds() {
        let mut store = MockDocumentStore::new();
        store
            .expect_delete()
            .withf(|collection, id| *collection == Collection::Experiences && id == "x")
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ExperienceService::new(Arc::new(store));
        let res = DeleteContentUseCase::<ExperienceRecord>::execute(&service, "x").await;

        assert!(res.is_ok());
    }
}
