//! Hand-rolled stubs for route tests that are not worth a full mock.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginError, LoginRequest, LoginResponse,
};
use crate::modules::theme::application::ports::incoming::use_cases::{
    GetThemeError, GetThemeUseCase, SaveThemeError, SaveThemeUseCase, ThemeUpdate,
};
use crate::modules::theme::application::theme_use_cases::ThemeUseCases;
use crate::modules::theme::domain::presets::preset_by_key;
use crate::modules::theme::domain::settings::{resolve, ResolvedTheme, ThemeDocument};

/// Default login for tests that never hit the login route.
pub struct UnreachableLogin;

#[async_trait]
impl ILoginAdminUseCase for UnreachableLogin {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        Err(LoginError::VerificationFailed(
            "login stub not configured".to_string(),
        ))
    }
}

/// Theme stub that resolves presets for real but never touches a
/// store. An injected error is returned by the next save.
pub struct StubThemeUseCases {
    save_error: Mutex<Option<SaveThemeError>>,
}

impl StubThemeUseCases {
    pub fn defaults() -> Self {
        Self {
            save_error: Mutex::new(None),
        }
    }

    pub fn with_save_error(self, error: SaveThemeError) -> Self {
        *self.save_error.lock().unwrap() = Some(error);
        self
    }

    pub fn into_use_cases(self) -> ThemeUseCases {
        let stub = std::sync::Arc::new(self);
        ThemeUseCases {
            get: stub.clone(),
            save: stub,
        }
    }
}

#[async_trait]
impl GetThemeUseCase for StubThemeUseCases {
    async fn execute(&self) -> Result<ResolvedTheme, GetThemeError> {
        Ok(resolve(None))
    }
}

#[async_trait]
impl SaveThemeUseCase for StubThemeUseCases {
    async fn execute(&self, update: ThemeUpdate) -> Result<ResolvedTheme, SaveThemeError> {
        if let Some(error) = self.save_error.lock().unwrap().take() {
            return Err(error);
        }
        let doc = match update {
            ThemeUpdate::Preset { key } => {
                let preset =
                    preset_by_key(&key).ok_or(SaveThemeError::UnknownPreset(key.clone()))?;
                ThemeDocument::from_preset(preset, Utc::now())
            }
            ThemeUpdate::Custom(custom) => ThemeDocument::from_custom(custom, Utc::now()),
        };
        Ok(resolve(Some(&doc)))
    }
}
