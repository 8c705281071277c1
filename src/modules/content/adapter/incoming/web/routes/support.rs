//! Shared plumbing for the per-entity route files: language
//! negotiation, field-error translation, and the response mapping
//! every entity endpoint repeats.

use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentError, DeleteContentUseCase, GetContentError, GetContentUseCase,
    ListContentError, ListContentUseCase, SaveContentError, SaveContentUseCase,
};
use crate::modules::content::domain::{ContentDraft, ContentRecord, FieldError};
use crate::modules::i18n::translator::{Language, Translator};
use crate::shared::api::ApiResponse;

pub fn request_language(req: &HttpRequest) -> Language {
    let header = req
        .headers()
        .get("Accept-Language")
        .and_then(|v| v.to_str().ok());
    Language::from_accept_language(header)
}

/// Resolve per-field message keys into the request language.
pub fn validation_details(
    translator: &Translator,
    language: Language,
    errors: Vec<FieldError>,
) -> BTreeMap<String, String> {
    errors
        .into_iter()
        .map(|e| {
            (
                e.field.to_string(),
                translator.t(language, e.message_key).to_string(),
            )
        })
        .collect()
}

/// Form-shaped view for edit prefill, id alongside the form fields.
#[derive(Serialize)]
pub struct FormView<F: Serialize> {
    pub id: String,
    #[serde(flatten)]
    pub form: F,
}

pub async fn respond_list<R: ContentRecord>(use_case: &dyn ListContentUseCase<R>) -> HttpResponse {
    match use_case.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(ListContentError::StoreError(e)) => {
            error!("List failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

pub async fn respond_get_form<R, F>(
    use_case: &dyn GetContentUseCase<R>,
    translator: &Translator,
    language: Language,
    id: &str,
    to_form: fn(&R) -> F,
) -> HttpResponse
where
    R: ContentRecord,
    F: Serialize,
{
    match use_case.execute(id).await {
        Ok(stored) => ApiResponse::success(FormView {
            id: stored.id,
            form: to_form(&stored.record),
        }),
        Err(GetContentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", translator.t(language, "error.not_found"))
        }
        Err(GetContentError::StoreError(e)) => {
            error!("Get failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

pub async fn respond_save<D: ContentDraft>(
    use_case: &dyn SaveContentUseCase<D>,
    translator: &Translator,
    language: Language,
    id: Option<String>,
    draft: D,
) -> HttpResponse {
    let creating = id.is_none();
    match use_case.execute(id, draft).await {
        Ok(stored) if creating => ApiResponse::created(stored),
        Ok(stored) => ApiResponse::success(stored),
        Err(SaveContentError::Validation(errors)) => {
            ApiResponse::validation_error(validation_details(translator, language, errors))
        }
        Err(SaveContentError::StoreError(e)) => {
            error!("Save failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

pub async fn respond_delete<R: ContentRecord>(
    use_case: &dyn DeleteContentUseCase<R>,
    translator: &Translator,
    language: Language,
    id: &str,
) -> HttpResponse {
    match use_case.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteContentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", translator.t(language, "error.not_found"))
        }
        Err(DeleteContentError::StoreError(e)) => {
            error!("Delete failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
