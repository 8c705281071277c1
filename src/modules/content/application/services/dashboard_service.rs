use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    DashboardError, DashboardSummary, GetDashboardSummaryUseCase,
};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, DocumentStore,
};

/// Collection sizes for the admin landing page.
pub struct DashboardService<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> DashboardService<S>
where
    S: DocumentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetDashboardSummaryUseCase for DashboardService<S>
where
    S: DocumentStore,
{
    async fn execute(&self) -> Result<DashboardSummary, DashboardError> {
        let mut counts = BTreeMap::new();
        for collection in [
            Collection::Experiences,
            Collection::Education,
            Collection::Certifications,
            Collection::Skills,
            Collection::Projects,
        ] {
            let count = self
                .store
                .count(collection)
                .await
                .map_err(|e| DashboardError::StoreError(e.to_string()))?;
            counts.insert(collection.as_str(), count);
        }

        Ok(DashboardSummary { counts })
    }
}
