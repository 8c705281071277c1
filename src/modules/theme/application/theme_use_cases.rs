use std::sync::Arc;

use crate::modules::store::application::ports::outgoing::document_store::DocumentStore;
use crate::modules::theme::application::ports::incoming::use_cases::{
    GetThemeUseCase, SaveThemeUseCase,
};
use crate::modules::theme::application::services::theme_service::ThemeService;

#[derive(Clone)]
pub struct ThemeUseCases {
    pub get: Arc<dyn GetThemeUseCase>,
    pub save: Arc<dyn SaveThemeUseCase>,
}

impl ThemeUseCases {
    pub fn build<S: DocumentStore + 'static>(store: Arc<S>) -> Self {
        let service = Arc::new(ThemeService::new(store));
        Self {
            get: service.clone(),
            save: service,
        }
    }
}
