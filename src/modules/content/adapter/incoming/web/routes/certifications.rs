use actix_web::{delete, get, post, put, web, HttpRequest, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::support;
use crate::modules::content::domain::certification::CertificationForm;
use crate::AppState;

#[get("/api/certifications")]
pub async fn list_certifications_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    support::respond_list(data.content.certifications.list.as_ref()).await
}

#[get("/api/certifications/{id}")]
pub async fn get_certification_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_get_form(
        data.content.certifications.get.as_ref(),
        &data.translator,
        language,
        &path,
        CertificationForm::from_record,
    )
    .await
}

#[post("/api/certifications")]
pub async fn create_certification_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<CertificationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.certifications.save.as_ref(),
        &data.translator,
        language,
        None,
        req.into_inner(),
    )
    .await
}

#[put("/api/certifications/{id}")]
pub async fn update_certification_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    req: web::Json<CertificationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.certifications.save.as_ref(),
        &data.translator,
        language,
        Some(path.into_inner()),
        req.into_inner(),
    )
    .await
}

#[delete("/api/certifications/{id}")]
pub async fn delete_certification_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_delete(
        data.content.certifications.delete.as_ref(),
        &data.translator,
        language,
        &path,
    )
    .await
}
