use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::auth::application::use_cases::logout_admin::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    /// Confirmation message
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Admin logout
///
/// Blacklists the presented token until its natural expiry.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logout successful"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.logout.execute(&admin.token).await {
        Ok(()) => {
            info!(email = %admin.email, "Admin logged out");
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out".to_string(),
            })
        }
        Err(LogoutError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
    }
}
