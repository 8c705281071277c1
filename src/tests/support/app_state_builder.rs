//! Builder for the shared application state in route tests. One
//! builder instance wires the token provider and blacklist into both
//! the state and the extractor's `app_data`, so tokens issued with
//! [`issue_test_token`] verify inside the same test app.

use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::token_blacklist_memory::InMemoryTokenBlacklist;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::i18n::Translator;
use crate::modules::store::application::ports::outgoing::document_store::MockDocumentStore;
use crate::modules::theme::application::theme_use_cases::ThemeUseCases;
use crate::tests::support::stubs::UnreachableLogin;
use crate::AppState;

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "Archfolio".to_string(),
        access_token_expiry: 1800,
    }
}

/// Mint a token the builder's default provider accepts.
pub fn issue_test_token(email: &str) -> String {
    JwtTokenService::new(test_jwt_config())
        .generate_access_token(email)
        .expect("test token generation")
}

pub struct TestAppStateBuilder {
    token_provider: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
    login: Arc<dyn ILoginAdminUseCase>,
    content: ContentUseCases,
    theme: ThemeUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let token_provider: Arc<dyn TokenProvider> =
            Arc::new(JwtTokenService::new(test_jwt_config()));
        let blacklist: Arc<dyn TokenBlacklist> = Arc::new(InMemoryTokenBlacklist::new());
        let empty_store = Arc::new(MockDocumentStore::new());
        Self {
            token_provider,
            blacklist,
            login: Arc::new(UnreachableLogin),
            content: ContentUseCases::build(empty_store.clone()),
            theme: ThemeUseCases::build(empty_store),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, login: impl ILoginAdminUseCase + 'static) -> Self {
        self.login = Arc::new(login);
        self
    }

    /// Back every content and theme use case with one mock store.
    pub fn with_store(mut self, store: MockDocumentStore) -> Self {
        let store = Arc::new(store);
        self.content = ContentUseCases::build(store.clone());
        self.theme = ThemeUseCases::build(store);
        self
    }

    pub fn with_theme(mut self, theme: ThemeUseCases) -> Self {
        self.theme = theme;
        self
    }

    /// `app_data` value for the admin extractor, sharing the
    /// builder's provider.
    pub fn token_provider_data(&self) -> web::Data<Arc<dyn TokenProvider>> {
        web::Data::new(self.token_provider.clone())
    }

    pub fn blacklist_data(&self) -> web::Data<Arc<dyn TokenBlacklist>> {
        web::Data::new(self.blacklist.clone())
    }

    pub fn build(&self) -> web::Data<AppState> {
        let auth = AuthUseCases {
            login: self.login.clone(),
            logout: Arc::new(LogoutAdminUseCase::new(
                self.token_provider.clone(),
                self.blacklist.clone(),
            )),
        };
        web::Data::new(AppState {
            content: self.content.clone(),
            theme: self.theme.clone(),
            auth,
            translator: Translator::new(),
        })
    }
}
