//! Unauthenticated read surface for the public site. Each endpoint
//! fetches only its own collection; an empty collection renders an
//! empty section, never an error.

use std::collections::BTreeMap;

use actix_web::{get, web, HttpRequest, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::modules::content::adapter::incoming::web::routes::projects::ProjectFilters;
use crate::modules::content::adapter::incoming::web::routes::support;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, ListContentError, Stored,
};
use crate::modules::content::domain::certification::CertificationRecord;
use crate::modules::content::domain::personal::{PersonalRecord, PERSONAL_DOC_ID};
use crate::modules::content::domain::project::{ProjectRecord, ProjectStatus};
use crate::modules::i18n::translator::Language;
use crate::modules::i18n::translations;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/public/personal")]
pub async fn public_personal_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.personal.get.execute(PERSONAL_DOC_ID).await {
        Ok(stored) => ApiResponse::success(Some(stored.record)),
        Err(GetContentError::NotFound) => ApiResponse::success(None::<PersonalRecord>),
        Err(GetContentError::StoreError(e)) => {
            error!("Public profile fetch failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/public/experiences")]
pub async fn public_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    support::respond_list(data.content.experiences.list.as_ref()).await
}

#[get("/api/public/education")]
pub async fn public_education_handler(data: web::Data<AppState>) -> impl Responder {
    support::respond_list(data.content.education.list.as_ref()).await
}

/// Certification as the public page renders it, with the expiry
/// verdict already computed against the serving clock.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublicCertification {
    id: String,
    #[serde(flatten)]
    record: CertificationRecord,
    expired: bool,
}

impl PublicCertification {
    fn new(stored: Stored<CertificationRecord>, now: DateTime<Utc>) -> Self {
        let expired = stored.record.is_expired(now);
        Self {
            id: stored.id,
            record: stored.record,
            expired,
        }
    }
}

#[get("/api/public/certifications")]
pub async fn public_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.certifications.list.execute().await {
        Ok(items) => {
            let now = Utc::now();
            let items: Vec<PublicCertification> = items
                .into_iter()
                .map(|stored| PublicCertification::new(stored, now))
                .collect();
            ApiResponse::success(items)
        }
        Err(ListContentError::StoreError(e)) => {
            error!("Public certifications fetch failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/public/skills")]
pub async fn public_skills_handler(data: web::Data<AppState>) -> impl Responder {
    support::respond_list(data.content.skills.list.as_ref()).await
}

/// Card shape for the portfolio grid: the cover stands in for the
/// gallery, which the detail endpoint serves in full.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectCard {
    id: String,
    title: String,
    description: String,
    technologies: Vec<String>,
    cover_image: Option<String>,
    image_count: usize,
    category: String,
    status: ProjectStatus,
    featured: bool,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl ProjectCard {
    fn new(stored: Stored<ProjectRecord>) -> Self {
        let record = stored.record;
        Self {
            id: stored.id,
            title: record.title,
            description: record.description,
            technologies: record.technologies,
            cover_image: record.images.first().cloned(),
            image_count: record.images.len(),
            category: record.category,
            status: record.status,
            featured: record.featured,
            start_date: record.start_date,
            end_date: record.end_date,
        }
    }
}

#[get("/api/public/projects")]
pub async fn public_projects_handler(
    filters: web::Query<ProjectFilters>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.projects.list.execute().await {
        Ok(projects) => {
            let cards: Vec<ProjectCard> = filters
                .apply(projects)
                .into_iter()
                .map(ProjectCard::new)
                .collect();
            ApiResponse::success(cards)
        }
        Err(ListContentError::StoreError(e)) => {
            error!("Public projects fetch failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/public/projects/{id}")]
pub async fn public_project_detail_handler(
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    match data.content.projects.get.execute(&path).await {
        Ok(stored) => ApiResponse::success(stored),
        Err(GetContentError::NotFound) => ApiResponse::not_found(
            "NOT_FOUND",
            data.translator.t(language, "error.not_found"),
        ),
        Err(GetContentError::StoreError(e)) => {
            error!("Public project fetch failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Full dictionary for one language, fetched once by the public shell.
#[get("/api/public/translations/{lang}")]
pub async fn public_translations_handler(
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match Language::from_code(&path) {
        Some(language) => {
            let dictionary: BTreeMap<&str, &str> =
                translations::entries(language).iter().copied().collect();
            ApiResponse::success(dictionary)
        }
        None => {
            let language = support::request_language(&http_req);
            ApiResponse::not_found(
                "UNKNOWN_LANGUAGE",
                data.translator.t(language, "error.unknown_language"),
            )
        }
    }
}
