use actix_web::{post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::login_admin::{
    LoginError, LoginRequest, LoginRequestError,
};
use crate::modules::i18n::translator::Language;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

fn request_language(req: &HttpRequest) -> Language {
    let header = req
        .headers()
        .get("Accept-Language")
        .and_then(|v| v.to_str().ok());
    Language::from_accept_language(header)
}

/// Admin login
///
/// Authenticates the admin account and returns a JWT access token.
/// Failure messages are localized via the Accept-Language header.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            example = json!({
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expiresIn": 1800,
                    "email": "admin@example.com"
                }
            })
        ),
        (
            status = 401,
            description = "Unknown user or wrong password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "AUTH_WRONG_PASSWORD",
                    "message": "Contraseña incorrecta"
                }
            })
        ),
        (
            status = 429,
            description = "Too many failed attempts",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    http_req: HttpRequest,
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = request_language(&http_req);
    let t = |key: &'static str| data.translator.t(language, key).to_string();

    let dto = req.into_inner();
    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(LoginRequestError::EmptyEmail | LoginRequestError::InvalidEmailFormat) => {
            return ApiResponse::bad_request("AUTH_INVALID_EMAIL", &t("auth.invalid_email"));
        }
        Err(LoginRequestError::EmptyPassword) => {
            return ApiResponse::bad_request("AUTH_FAILED", &t("auth.failed"));
        }
    };

    match data.auth.login.execute(request).await {
        Ok(response) => ApiResponse::success(response),

        Err(LoginError::UserNotFound) => {
            ApiResponse::unauthorized("AUTH_USER_NOT_FOUND", &t("auth.user_not_found"))
        }

        Err(LoginError::WrongPassword) => {
            ApiResponse::unauthorized("AUTH_WRONG_PASSWORD", &t("auth.wrong_password"))
        }

        Err(LoginError::RateLimited) => {
            warn!("Login rate limit hit");
            ApiResponse::too_many_requests("AUTH_RATE_LIMITED", &t("auth.rate_limited"))
        }

        Err(LoginError::VerificationFailed(e)) | Err(LoginError::TokenGenerationFailed(e)) => {
            error!("Login failed unexpectedly: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::auth::application::use_cases::login_admin::{
        ILoginAdminUseCase, LoginResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct StubLogin {
        result: Result<LoginResponse, LoginError>,
    }

    #[async_trait]
    impl ILoginAdminUseCase for StubLogin {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
            self.result.clone()
        }
    }

    fn ok_response() -> LoginResponse {
        LoginResponse {
            access_token: "token".to_string(),
            expires_in: 1800,
            email: "admin@example.com".to_string(),
        }
    }

    async fn call(
        stub: StubLogin,
        body: Value,
        accept_language: Option<&str>,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_login(stub).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let mut req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&body);
        if let Some(lang) = accept_language {
            req = req.insert_header(("Accept-Language", lang));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    fn credentials() -> Value {
        serde_json::json!({"email": "admin@example.com", "password": "secret"})
    }

    #[actix_web::test]
    async fn test_login_success_returns_token() {
        let stub = StubLogin {
            result: Ok(ok_response()),
        };

        let (status, body) = call(stub, credentials(), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["accessToken"], "token");
        assert_eq!(body["data"]["expiresIn"], 1800);
    }

    #[actix_web::test]
    async fn test_unknown_user_code_with_spanish_default() {
        let stub = StubLogin {
            result: Err(LoginError::UserNotFound),
        };

        let (status, body) = call(stub, credentials(), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "AUTH_USER_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Usuario no encontrado");
    }

    #[actix_web::test]
    async fn test_wrong_password_localizes_to_english() {
        let stub = StubLogin {
            result: Err(LoginError::WrongPassword),
        };

        let (status, body) = call(stub, credentials(), Some("en-US,en;q=0.9")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "AUTH_WRONG_PASSWORD");
        assert_eq!(body["error"]["message"], "Wrong password");
    }

    #[actix_web::test]
    async fn test_malformed_email_rejected_before_use_case() {
        let stub = StubLogin {
            result: Ok(ok_response()),
        };

        let body = serde_json::json!({"email": "not-an-email", "password": "secret"});
        let (status, body) = call(stub, body, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "AUTH_INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn test_rate_limited_returns_429() {
        let stub = StubLogin {
            result: Err(LoginError::RateLimited),
        };

        let (status, body) = call(stub, credentials(), None).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"]["code"], "AUTH_RATE_LIMITED");
    }
}
