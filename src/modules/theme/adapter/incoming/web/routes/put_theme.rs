use actix_web::{put, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::i18n::translator::Language;
use crate::modules::theme::application::ports::incoming::use_cases::{
    SaveThemeError, ThemeUpdate,
};
use crate::modules::theme::domain::settings::CustomTheme;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Theme update request. Exactly one of `preset` and `custom` must be
/// present.
#[derive(Deserialize, ToSchema)]
pub struct ThemeUpdateDto {
    /// Key of a shipped preset
    #[schema(example = "classic-purple")]
    pub preset: Option<String>,

    /// Full set of custom values
    pub custom: Option<CustomThemeDto>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomThemeDto {
    #[schema(example = "#111827")]
    pub background_color: String,
    #[schema(example = "#a78bfa")]
    pub title_color: String,
    #[schema(example = "#ffffff")]
    pub text_color: String,
    #[schema(example = "serif")]
    pub title_font: String,
    #[schema(example = "system-ui")]
    pub text_font: String,
}

impl ThemeUpdateDto {
    fn into_update(self) -> Result<ThemeUpdate, &'static str> {
        match (self.preset, self.custom) {
            (Some(key), None) => Ok(ThemeUpdate::Preset { key }),
            (None, Some(custom)) => Ok(ThemeUpdate::Custom(CustomTheme {
                background_color: custom.background_color,
                title_color: custom.title_color,
                text_color: custom.text_color,
                title_font: custom.title_font,
                text_font: custom.text_font,
            })),
            (Some(_), Some(_)) => Err("validation.theme_both_shapes"),
            (None, None) => Err("validation.theme_missing_shape"),
        }
    }
}

fn request_language(req: &HttpRequest) -> Language {
    let header = req
        .headers()
        .get("Accept-Language")
        .and_then(|v| v.to_str().ok());
    Language::from_accept_language(header)
}

/// Save the site theme
///
/// Applies either a shipped preset or a full custom theme, then
/// returns the resolved result.
#[utoipa::path(
    put,
    path = "/api/theme",
    tag = "theme",
    security(("bearer_auth" = [])),
    request_body = ThemeUpdateDto,
    responses(
        (status = 200, description = "Theme saved"),
        (
            status = 400,
            description = "Bad preset key, color, or font",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Tema predefinido desconocido"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[put("/api/theme")]
pub async fn put_theme_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<ThemeUpdateDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = request_language(&http_req);
    let t = |key: &'static str| data.translator.t(language, key).to_string();

    let update = match req.into_inner().into_update() {
        Ok(update) => update,
        Err(key) => return ApiResponse::bad_request("VALIDATION_ERROR", &t(key)),
    };

    match data.theme.save.execute(update).await {
        Ok(theme) => {
            info!(custom = theme.is_custom, "Theme saved");
            ApiResponse::success(theme)
        }
        Err(SaveThemeError::UnknownPreset(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &t("validation.theme_unknown_preset"))
        }
        Err(SaveThemeError::InvalidColor { .. }) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &t("validation.theme_invalid_color"))
        }
        Err(SaveThemeError::UnknownFont { .. }) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &t("validation.theme_unknown_font"))
        }
        Err(SaveThemeError::StoreError(e)) => {
            error!("Failed to save theme: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::tests::support::app_state_builder::{issue_test_token, TestAppStateBuilder};
    use crate::tests::support::stubs::StubThemeUseCases;

    async fn put(stub: StubThemeUseCases, body: Value) -> (StatusCode, Value) {
        let builder = TestAppStateBuilder::default().with_theme(stub.into_use_cases());
        let token = issue_test_token("admin@example.com");
        let provider = builder.token_provider_data();
        let blacklist = builder.blacklist_data();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(provider)
                .app_data(blacklist)
                .service(put_theme_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/theme")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_preset_update_returns_resolved_theme() {
        let (status, body) =
            put(StubThemeUseCases::defaults(), json!({"preset": "classic-purple"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["preset"], "classic-purple");
        assert_eq!(body["data"]["isCustom"], false);
    }

    #[actix_web::test]
    async fn test_both_shapes_at_once_is_rejected() {
        let body = json!({
            "preset": "classic-purple",
            "custom": {
                "backgroundColor": "#000000",
                "titleColor": "#ffffff",
                "textColor": "#cccccc",
                "titleFont": "serif",
                "textFont": "system-ui"
            }
        });
        let (status, body) = put(StubThemeUseCases::defaults(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_empty_body_is_rejected() {
        let (status, body) = put(StubThemeUseCases::defaults(), json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_unknown_preset_maps_to_validation_error() {
        let stub = StubThemeUseCases::defaults()
            .with_save_error(SaveThemeError::UnknownPreset("neon-pink".to_string()));
        let (status, body) = put(stub, json!({"preset": "neon-pink"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Tema predefinido desconocido");
    }
}
