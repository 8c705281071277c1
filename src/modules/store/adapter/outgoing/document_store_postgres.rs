use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::modules::store::adapter::outgoing::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction, Document, DocumentStore, StoreError,
};

// ============================================================================
// Store Implementation
// ============================================================================

/// Postgres-backed document store: one JSONB row per document,
/// keyed by (collection, doc id). Collections here are CV-sized,
/// so ordering happens in memory after the fetch.
#[derive(Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn upsert_model(collection: Collection, doc: Document) -> ActiveModel {
        ActiveModel {
            collection: Set(collection.as_str().to_string()),
            doc_id: Set(doc.id),
            data: Set(doc.data),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }

    fn upsert_conflict() -> OnConflict {
        OnConflict::columns([Column::Collection, Column::DocId])
            .update_columns([Column::Data, Column::UpdatedAt])
            .to_owned()
    }
}

fn map_db_err(e: DbErr) -> StoreError {
    StoreError::DatabaseError(e.to_string())
}

/// A missing field and an explicit null both mean "no order key".
fn order_key(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Ordering over present JSON order keys: numbers numerically, strings
/// lexicographically (RFC 3339 timestamps order correctly this way),
/// mismatched or unsupported types compare equal.
fn compare_order_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        let row = Entity::find()
            .filter(Column::Collection.eq(collection.as_str()))
            .filter(Column::DocId.eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_document()))
    }

    async fn list(
        &self,
        collection: Collection,
        order_field: &str,
        direction: Direction,
    ) -> Result<Vec<Document>, StoreError> {
        let rows = Entity::find()
            .filter(Column::Collection.eq(collection.as_str()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut docs: Vec<Document> = rows.iter().map(|m| m.to_document()).collect();

        // Documents without the order key sort last regardless of
        // direction; only present keys follow it.
        docs.sort_by(|a, b| {
            match (
                order_key(a.data.get(order_field)),
                order_key(b.data.get(order_field)),
            ) {
                (Some(x), Some(y)) => match direction {
                    Direction::Ascending => compare_order_values(x, y),
                    Direction::Descending => compare_order_values(x, y).reverse(),
                },
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });

        Ok(docs)
    }

    async fn set(&self, collection: Collection, id: &str, data: Value) -> Result<(), StoreError> {
        let model = Self::upsert_model(collection, Document::new(id, data));

        Entity::insert(model)
            .on_conflict(Self::upsert_conflict())
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn set_many(
        &self,
        collection: Collection,
        docs: Vec<Document>,
    ) -> Result<(), StoreError> {
        if docs.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await.map_err(map_db_err)?;

        for doc in docs {
            let model = Self::upsert_model(collection, doc);
            Entity::insert(model)
                .on_conflict(Self::upsert_conflict())
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let result = Entity::delete_many()
            .filter(Column::Collection.eq(collection.as_str()))
            .filter(Column::DocId.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        Entity::find()
            .filter(Column::Collection.eq(collection.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
