use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::credential_verifier::{
    CredentialError, CredentialVerifier,
};
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::services::rate_limiter::LoginRateLimiter;

// ========================= Login Request =========================

/// Validated login request. Construction guarantees a well-formed,
/// lowercased email and a non-empty password.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        let password = password.trim().to_string();
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone)]
pub enum LoginError {
    UserNotFound,
    WrongPassword,
    RateLimited,
    VerificationFailed(String),
    TokenGenerationFailed(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::UserNotFound => write!(f, "User not found"),
            LoginError::WrongPassword => write!(f, "Wrong password"),
            LoginError::RateLimited => write!(f, "Too many failed attempts"),
            LoginError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoginError {}

// ====================== Login Response ==========================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub email: String,
}

// ====================== Use case ================================

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

pub struct LoginAdminUseCase {
    credentials: Arc<dyn CredentialVerifier>,
    tokens: Arc<dyn TokenProvider>,
    rate_limiter: Arc<LoginRateLimiter>,
}

impl LoginAdminUseCase {
    pub fn new(
        credentials: Arc<dyn CredentialVerifier>,
        tokens: Arc<dyn TokenProvider>,
        rate_limiter: Arc<LoginRateLimiter>,
    ) -> Self {
        Self {
            credentials,
            tokens,
            rate_limiter,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        if self.rate_limiter.is_limited(request.email()) {
            return Err(LoginError::RateLimited);
        }

        match self.credentials.verify(request.email(), request.password()) {
            Ok(()) => {}
            Err(CredentialError::UnknownUser) => {
                self.rate_limiter.register_failure(request.email());
                return Err(LoginError::UserNotFound);
            }
            Err(CredentialError::WrongPassword) => {
                self.rate_limiter.register_failure(request.email());
                return Err(LoginError::WrongPassword);
            }
            Err(CredentialError::HashError(msg)) => {
                return Err(LoginError::VerificationFailed(msg));
            }
        }

        self.rate_limiter.reset(request.email());

        let access_token = self
            .tokens
            .generate_access_token(request.email())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            access_token,
            expires_in: self.tokens.access_token_expiry(),
            email: request.email().to_string(),
        })
    }
}
