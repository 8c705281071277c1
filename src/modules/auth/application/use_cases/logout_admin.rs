use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

#[derive(Debug, Clone)]
pub enum LogoutError {
    InvalidToken,
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::InvalidToken => write!(f, "Invalid or expired token"),
        }
    }
}

impl std::error::Error for LogoutError {}

#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

/// Blacklists the presented token's `jti` until its natural expiry.
/// An already-invalid token has nothing left to revoke.
pub struct LogoutAdminUseCase {
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutAdminUseCase {
    pub fn new(tokens: Arc<dyn TokenProvider>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_token(token)
            .map_err(|_| LogoutError::InvalidToken)?;

        self.blacklist.revoke(claims.jti, claims.exp);
        Ok(())
    }
}
