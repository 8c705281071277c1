use actix_web::{delete, get, post, put, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::support;
use crate::modules::content::application::ports::incoming::use_cases::{
    ListContentError, Stored,
};
use crate::modules::content::domain::project::{ProjectForm, ProjectRecord, ProjectStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Query-string filters for project lists, applied in memory to the
/// fetched collection. Absent parameters filter nothing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProjectFilters {
    pub category: Option<String>,
    /// Matches any entry of the project's technology tags.
    pub technology: Option<String>,
    #[param(value_type = Option<String>, example = "completed")]
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
}

impl ProjectFilters {
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        if let Some(category) = &self.category {
            if &record.category != category {
                return false;
            }
        }
        if let Some(technology) = &self.technology {
            if !record.technologies.iter().any(|t| t == technology) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if record.featured != featured {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, projects: Vec<Stored<ProjectRecord>>) -> Vec<Stored<ProjectRecord>> {
        projects
            .into_iter()
            .filter(|p| self.matches(&p.record))
            .collect()
    }
}

/// List projects
///
/// Newest first. `category`, `technology`, `status`, and `featured`
/// query parameters narrow the result.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    security(("bearer_auth" = [])),
    params(ProjectFilters),
    responses(
        (status = 200, description = "Filtered, ordered collection"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(
    _admin: AdminUser,
    filters: web::Query<ProjectFilters>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.projects.list.execute().await {
        Ok(projects) => ApiResponse::success(filters.apply(projects)),
        Err(ListContentError::StoreError(e)) => {
            error!("List failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_get_form(
        data.content.projects.get.as_ref(),
        &data.translator,
        language,
        &path,
        ProjectForm::from_record,
    )
    .await
}

#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.projects.save.as_ref(),
        &data.translator,
        language,
        None,
        req.into_inner(),
    )
    .await
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    req: web::Json<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.projects.save.as_ref(),
        &data.translator,
        language,
        Some(path.into_inner()),
        req.into_inner(),
    )
    .await
}

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_delete(
        data.content.projects.delete.as_ref(),
        &data.translator,
        language,
        &path,
    )
    .await
}
