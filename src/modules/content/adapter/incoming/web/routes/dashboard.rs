use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::ports::incoming::use_cases::DashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Dashboard summary
///
/// Document counts per content collection, one card each on the
/// admin landing page.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Per-collection counts",
            example = json!({
                "success": true,
                "data": {
                    "counts": {
                        "certifications": 3,
                        "education": 2,
                        "experiences": 4,
                        "projects": 12,
                        "skills": 9
                    }
                }
            })
        ),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/dashboard")]
pub async fn dashboard_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.content.dashboard.execute().await {
        Ok(summary) => ApiResponse::success(summary),
        Err(DashboardError::StoreError(e)) => {
            error!("Dashboard summary failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::modules::store::application::ports::outgoing::document_store::MockDocumentStore;
    use crate::tests::support::app_state_builder::{issue_test_token, TestAppStateBuilder};

    #[actix_web::test]
    async fn test_summary_counts_each_collection() {
        let mut store = MockDocumentStore::new();
        store.expect_count().returning(|_| Ok(2));

        let builder = TestAppStateBuilder::default().with_store(store);
        let provider = builder.token_provider_data();
        let blacklist = builder.blacklist_data();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(provider)
                .app_data(blacklist)
                .service(dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard")
            .insert_header((
                "Authorization",
                format!("Bearer {}", issue_test_token("admin@example.com")),
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["counts"]["projects"], 2);
        assert_eq!(body["data"]["counts"].as_object().unwrap().len(), 5);
    }
}
