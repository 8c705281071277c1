use actix_web::{get, put, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::support;
use crate::modules::content::application::ports::incoming::use_cases::GetContentError;
use crate::modules::content::domain::personal::{PersonalForm, PERSONAL_DOC_ID};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Load the profile form
///
/// The profile is a singleton; a deployment that has never saved one
/// gets an empty form instead of an error.
#[utoipa::path(
    get,
    path = "/api/personal",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Form values, blank when unset"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/personal")]
pub async fn get_personal_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.content.personal.get.execute(PERSONAL_DOC_ID).await {
        Ok(stored) => ApiResponse::success(PersonalForm::from_record(&stored.record)),
        Err(GetContentError::NotFound) => ApiResponse::success(PersonalForm::default()),
        Err(GetContentError::StoreError(e)) => {
            error!("Profile load failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/personal")]
pub async fn put_personal_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<PersonalForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.personal.save.as_ref(),
        &data.translator,
        language,
        Some(PERSONAL_DOC_ID.to_string()),
        req.into_inner(),
    )
    .await
}
