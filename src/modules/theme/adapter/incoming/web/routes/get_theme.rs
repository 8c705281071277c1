use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::theme::application::ports::incoming::use_cases::GetThemeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the site theme
///
/// Returns the fully resolved theme for the admin editor. Resolution
/// fills defaults when no theme has been saved yet.
#[utoipa::path(
    get,
    path = "/api/theme",
    tag = "theme",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Resolved theme",
            example = json!({
                "success": true,
                "data": {
                    "backgroundColor": "#111827",
                    "titleColor": "#a78bfa",
                    "textColor": "#ffffff",
                    "accentColor": "#c084fc",
                    "titleFont": "system-ui",
                    "textFont": "system-ui",
                    "isCustom": false,
                    "preset": "classic-purple"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/theme")]
pub async fn get_theme_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.theme.get.execute().await {
        Ok(theme) => ApiResponse::success(theme),
        Err(GetThemeError::StoreError(e)) => {
            error!("Failed to load theme: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::tests::support::app_state_builder::{issue_test_token, TestAppStateBuilder};
    use crate::tests::support::stubs::StubThemeUseCases;

    #[actix_web::test]
    async fn test_returns_resolved_theme_for_admin() {
        let builder = TestAppStateBuilder::default()
            .with_theme(StubThemeUseCases::defaults().into_use_cases());
        let token = issue_test_token("admin@example.com");
        let provider = builder.token_provider_data();
        let blacklist = builder.blacklist_data();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(provider)
                .app_data(blacklist)
                .service(get_theme_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/theme")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["preset"], "classic-purple");
        assert_eq!(body["data"]["titleColor"], "#a78bfa");
    }

    #[actix_web::test]
    async fn test_requires_bearer_token() {
        let builder = TestAppStateBuilder::default();
        let provider = builder.token_provider_data();
        let blacklist = builder.blacklist_data();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(provider)
                .app_data(blacklist)
                .service(get_theme_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/theme").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }
}
