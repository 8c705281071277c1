use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// The authenticated admin behind a bearer token. Extraction fails
/// the request with the envelope's auth codes before the handler runs.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
    pub jti: Uuid,
    /// The raw token, kept so logout can revoke exactly what was
    /// presented.
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>() {
            Some(service) => service,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };
        let blacklist = match req.app_data::<actix_web::web::Data<Arc<dyn TokenBlacklist>>>() {
            Some(service) => service,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match tokens.verify_token(&token) {
            Ok(claims) => {
                if blacklist.is_revoked(&claims.jti) {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "TOKEN_REVOKED",
                        "Token has been revoked",
                    ))));
                }

                ready(Ok(AdminUser {
                    email: claims.sub,
                    jti: claims.jti,
                    token,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
