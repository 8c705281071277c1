use actix_web::{delete, get, post, put, web, HttpRequest, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::support;
use crate::modules::content::domain::experience::ExperienceForm;
use crate::AppState;

/// List work experiences
///
/// Newest first, ordered by start date.
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ordered collection"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/experiences")]
pub async fn list_experiences_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    support::respond_list(data.content.experiences.list.as_ref()).await
}

#[get("/api/experiences/{id}")]
pub async fn get_experience_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_get_form(
        data.content.experiences.get.as_ref(),
        &data.translator,
        language,
        &path,
        ExperienceForm::from_record,
    )
    .await
}

#[post("/api/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.experiences.save.as_ref(),
        &data.translator,
        language,
        None,
        req.into_inner(),
    )
    .await
}

#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    req: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.experiences.save.as_ref(),
        &data.translator,
        language,
        Some(path.into_inner()),
        req.into_inner(),
    )
    .await
}

#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_delete(
        data.content.experiences.delete.as_ref(),
        &data.translator,
        language,
        &path,
    )
    .await
}
