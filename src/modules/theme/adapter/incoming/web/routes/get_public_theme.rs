use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::theme::application::ports::incoming::use_cases::GetThemeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the public site theme
///
/// Same resolution as the admin endpoint, served without
/// authentication so the public site can style itself.
#[utoipa::path(
    get,
    path = "/api/public/theme",
    tag = "public",
    responses(
        (status = 200, description = "Resolved theme"),
    )
)]
#[get("/api/public/theme")]
pub async fn get_public_theme_handler(data: web::Data<AppState>) -> impl Responder {
    match data.theme.get.execute().await {
        Ok(theme) => ApiResponse::success(theme),
        Err(GetThemeError::StoreError(e)) => {
            error!("Failed to load public theme: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubThemeUseCases;

    #[actix_web::test]
    async fn test_served_without_token() {
        let app_state = TestAppStateBuilder::default()
            .with_theme(StubThemeUseCases::defaults().into_use_cases())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_theme_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/public/theme").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["preset"], "classic-purple");
        assert_eq!(body["data"]["textColor"], "#ffffff");
    }
}
