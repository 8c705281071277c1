use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    ReorderSkillsError, ReorderSkillsUseCase, Stored,
};
use crate::modules::content::domain::skill::SkillRecord;
use crate::modules::content::domain::ContentRecord;
use crate::modules::store::application::ports::outgoing::document_store::{
    Document, DocumentStore,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Rewrites every skill's `order` field from its zero-based position
/// in the submitted sequence. The rewrite is one atomic batch; a
/// failed batch leaves the stored order untouched, so the caller can
/// re-fetch the authoritative list.
pub struct ReorderSkillsService<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> ReorderSkillsService<S>
where
    S: DocumentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ReorderSkillsUseCase for ReorderSkillsService<S>
where
    S: DocumentStore,
{
    async fn execute(
        &self,
        ordered_ids: Vec<String>,
    ) -> Result<Vec<Stored<SkillRecord>>, ReorderSkillsError> {
        let store_err = |msg: String| ReorderSkillsError::StoreError(msg);

        let docs = self
            .store
            .list(
                SkillRecord::COLLECTION,
                SkillRecord::ORDER_FIELD,
                SkillRecord::ORDER_DIRECTION,
            )
            .await
            .map_err(|e| store_err(e.to_string()))?;

        let mut by_id: HashMap<String, SkillRecord> = HashMap::with_capacity(docs.len());
        for doc in docs {
            let record: SkillRecord = serde_json::from_value(doc.data)
                .map_err(|e| store_err(e.to_string()))?;
            by_id.insert(doc.id, record);
        }

        // The submitted sequence must cover the stored set exactly,
        // otherwise positions would silently drift.
        let unknown: Vec<String> = ordered_ids
            .iter()
            .filter(|id| !by_id.contains_key(*id))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(ReorderSkillsError::UnknownIds(unknown));
        }
        if ordered_ids.len() != by_id.len() {
            let missing: Vec<String> = by_id
                .keys()
                .filter(|id| !ordered_ids.contains(*id))
                .cloned()
                .collect();
            return Err(ReorderSkillsError::UnknownIds(missing));
        }

        let mut reordered: Vec<Stored<SkillRecord>> = Vec::with_capacity(ordered_ids.len());
        let mut batch: Vec<Document> = Vec::with_capacity(ordered_ids.len());
        for (position, id) in ordered_ids.into_iter().enumerate() {
            let mut record = match by_id.remove(&id) {
                Some(record) => record,
                None => {
                    // Duplicate id in the submission.
                    return Err(ReorderSkillsError::UnknownIds(vec![id]));
                }
            };
            record.order = position as i64;

            let data = serde_json::to_value(&record).map_err(|e| store_err(e.to_string()))?;
            batch.push(Document::new(id.clone(), data));
            reordered.push(Stored::new(id, record));
        }

        self.store
            .set_many(SkillRecord::COLLECTION, batch)
            .await
            .map_err(|e| store_err(e.to_string()))?;

        Ok(reordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::modules::store::application::ports::outgoing::document_store::{
        Collection, MockDocumentStore, StoreError,
    };

    fn skill_doc(id: &str, name: &str, order: i64) -> Document {
        let record = SkillRecord {
            name: name.to_string(),
            category: "BIM Software".to_string(),
            proficiency: 4,
            years_of_experience: 3,
            order,
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        };
        Document::new(id, serde_json::to_value(record).unwrap())
    }

    #[tokio::test]
    async fn test_positions_follow_submitted_sequence() {
        let mut store = MockDocumentStore::new();
        store.expect_list().returning(|_, _, _| {
            Ok(vec![
                skill_doc("a", "Revit", 0),
                skill_doc("b", "AutoCAD", 1),
                skill_doc("c", "Lumion", 2),
            ])
        });
        store
            .expect_set_many()
            .withf(|collection, docs| {
                *collection == Collection::Skills
                    && docs.len() == 3
                    && docs[0].id == "c"
                    && docs[0].data["order"] == serde_json::json!(0)
                    && docs[1].id == "a"
                    && docs[1].data["order"] == serde_json::json!(1)
                    && docs[2].id == "b"
                    && docs[2].data["order"] == serde_json::json!(2)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ReorderSkillsService::new(Arc::new(store));
        let reordered = service
            .execute(vec!["c".to_string(), "a".to_string(), "b".to_string()])
            .await
            .expect("reorders");

        let names: Vec<&str> = reordered.iter().map(|s| s.record.name.as_str()).collect();
        assert_eq!(names, vec!["Lumion", "Revit", "AutoCAD"]);
        assert_eq!(reordered[0].record.order, 0);
        assert_eq!(reordered[2].record.order, 2);
    }

    #[tokio::test]
    async fn test_unknown_id_is_rejected_before_any_write() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .returning(|_, _, _| Ok(vec![skill_doc("a", "Revit", 0)]));

        let service = ReorderSkillsService::new(Arc::new(store));
        let res = service
            .execute(vec!["a".to_string(), "ghost".to_string()])
            .await;

        assert!(matches!(
            res,
            Err(ReorderSkillsError::UnknownIds(ids)) if ids == vec!["ghost".to_string()]
        ));
    }

    #[tokio::test]
    async fn test_incomplete_sequence_is_rejected() {
        let mut store = MockDocumentStore::new();
        store.expect_list().returning(|_, _, _| {
            Ok(vec![skill_doc("a", "Revit", 0), skill_doc("b", "AutoCAD", 1)])
        });

        let service = ReorderSkillsService::new(Arc::new(store));
        let res = service.execute(vec!["a".to_string()]).await;

        assert!(matches!(
            res,
            Err(ReorderSkillsError::UnknownIds(ids)) if ids == vec!["b".to_string()]
        ));
    }

    #[tokio::test]
    async fn test_failed_batch_surfaces_store_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .returning(|_, _, _| Ok(vec![skill_doc("a", "Revit", 0)]));
        store
            .expect_set_many()
            .returning(|_, _| Err(StoreError::DatabaseError("tx aborted".to_string())));

        let service = ReorderSkillsService::new(Arc::new(store));
        let res = service.execute(vec!["a".to_string()]).await;

        assert!(matches!(
            res,
            Err(ReorderSkillsError::StoreError(msg)) if msg.contains("tx aborted")
        ));
    }
}
