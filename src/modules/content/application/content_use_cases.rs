use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentUseCase, GetContentUseCase, GetDashboardSummaryUseCase, ListContentUseCase,
    ReorderSkillsUseCase, SaveContentUseCase,
};
use crate::modules::content::application::services::content_service::ContentService;
use crate::modules::content::application::services::dashboard_service::DashboardService;
use crate::modules::content::application::services::reorder_skills_service::ReorderSkillsService;
use crate::modules::content::domain::certification::CertificationForm;
use crate::modules::content::domain::education::EducationForm;
use crate::modules::content::domain::experience::ExperienceForm;
use crate::modules::content::domain::personal::PersonalForm;
use crate::modules::content::domain::project::ProjectForm;
use crate::modules::content::domain::skill::SkillForm;
use crate::modules::content::domain::ContentDraft;
use crate::modules::store::application::ports::outgoing::document_store::DocumentStore;

/// The four CRUD entry points of one entity, as trait objects so the
/// web layer and tests can swap implementations freely.
pub struct EntityUseCases<D: ContentDraft> {
    pub save: Arc<dyn SaveContentUseCase<D>>,
    pub get: Arc<dyn GetContentUseCase<D::Record>>,
    pub list: Arc<dyn ListContentUseCase<D::Record>>,
    pub delete: Arc<dyn DeleteContentUseCase<D::Record>>,
}

impl<D: ContentDraft> Clone for EntityUseCases<D> {
    fn clone(&self) -> Self {
        Self {
            save: self.save.clone(),
            get: self.get.clone(),
            list: self.list.clone(),
            delete: self.delete.clone(),
        }
    }
}

impl<D: ContentDraft> EntityUseCases<D> {
    /// All four entry points backed by one shared service instance.
    pub fn from_store<S: DocumentStore + 'static>(store: Arc<S>) -> Self {
        let service = Arc::new(ContentService::<S, D>::new(store));
        Self {
            save: service.clone(),
            get: service.clone(),
            list: service.clone(),
            delete: service,
        }
    }
}

#[derive(Clone)]
pub struct ContentUseCases {
    pub personal: EntityUseCases<PersonalForm>,
    pub experiences: EntityUseCases<ExperienceForm>,
    pub education: EntityUseCases<EducationForm>,
    pub certifications: EntityUseCases<CertificationForm>,
    pub skills: EntityUseCases<SkillForm>,
    pub projects: EntityUseCases<ProjectForm>,
    pub reorder_skills: Arc<dyn ReorderSkillsUseCase>,
    pub dashboard: Arc<dyn GetDashboardSummaryUseCase>,
}

impl ContentUseCases {
    pub fn build<S: DocumentStore + 'static>(store: Arc<S>) -> Self {
        Self {
            personal: EntityUseCases::from_store(store.clone()),
            experiences: EntityUseCases::from_store(store.clone()),
            education: EntityUseCases::from_store(store.clone()),
            certifications: EntityUseCases::from_store(store.clone()),
            skills: EntityUseCases::from_store(store.clone()),
            projects: EntityUseCases::from_store(store.clone()),
            reorder_skills: Arc::new(ReorderSkillsService::new(store.clone())),
            dashboard: Arc::new(DashboardService::new(store)),
        }
    }
}
