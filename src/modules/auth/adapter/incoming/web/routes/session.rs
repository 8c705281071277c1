use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct SessionResponseBody {
    /// Authenticated admin email
    #[schema(example = "admin@example.com")]
    pub email: String,
}

/// Current session
///
/// Echoes the authenticated identity. The admin shell polls this to
/// decide between the login page and the panel.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(SessionResponseBody { email: admin.email })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::{issue_test_token, TestAppStateBuilder};

    #[actix_web::test]
    async fn test_session_echoes_identity() {
        let builder = TestAppStateBuilder::default();
        let token_data = builder.token_provider_data();
        let blacklist_data = builder.blacklist_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data)
                .app_data(blacklist_data)
                .service(session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header((
                "Authorization",
                format!("Bearer {}", issue_test_token("admin@example.com")),
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "admin@example.com");
    }

    #[actix_web::test]
    async fn test_garbage_token_is_rejected() {
        let builder = TestAppStateBuilder::default();
        let token_data = builder.token_provider_data();
        let blacklist_data = builder.blacklist_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data)
                .app_data(blacklist_data)
                .service(session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }
}
