use actix_web::{delete, get, post, put, web, HttpRequest, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::support;
use crate::modules::content::domain::education::EducationForm;
use crate::AppState;

#[get("/api/education")]
pub async fn list_education_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    support::respond_list(data.content.education.list.as_ref()).await
}

#[get("/api/education/{id}")]
pub async fn get_education_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_get_form(
        data.content.education.get.as_ref(),
        &data.translator,
        language,
        &path,
        EducationForm::from_record,
    )
    .await
}

#[post("/api/education")]
pub async fn create_education_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<EducationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.education.save.as_ref(),
        &data.translator,
        language,
        None,
        req.into_inner(),
    )
    .await
}

#[put("/api/education/{id}")]
pub async fn update_education_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    req: web::Json<EducationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.education.save.as_ref(),
        &data.translator,
        language,
        Some(path.into_inner()),
        req.into_inner(),
    )
    .await
}

#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_delete(
        data.content.education.delete.as_ref(),
        &data.translator,
        language,
        &path,
    )
    .await
}
