use std::fmt;

use async_trait::async_trait;

use crate::modules::store::application::ports::outgoing::document_store::StoreError;
use crate::modules::theme::domain::settings::{CustomTheme, ResolvedTheme};

#[derive(Debug)]
pub enum GetThemeError {
    StoreError(StoreError),
}

impl fmt::Display for GetThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetThemeError::StoreError(e) => write!(f, "Failed to load theme: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum SaveThemeError {
    UnknownPreset(String),
    InvalidColor { field: &'static str },
    UnknownFont { field: &'static str },
    StoreError(StoreError),
}

impl fmt::Display for SaveThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveThemeError::UnknownPreset(key) => write!(f, "Unknown theme preset: {}", key),
            SaveThemeError::InvalidColor { field } => {
                write!(f, "Invalid hex color in field {}", field)
            }
            SaveThemeError::UnknownFont { field } => {
                write!(f, "Unknown font option in field {}", field)
            }
            SaveThemeError::StoreError(e) => write!(f, "Failed to save theme: {}", e),
        }
    }
}

#[async_trait]
pub trait GetThemeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResolvedTheme, GetThemeError>;
}

/// Exactly one of the two shapes per request; the web layer enforces
/// the exclusivity before building this value.
#[derive(Debug, Clone)]
pub enum ThemeUpdate {
    Preset { key: String },
    Custom(CustomTheme),
}

#[async_trait]
pub trait SaveThemeUseCase: Send + Sync {
    async fn execute(&self, update: ThemeUpdate) -> Result<ResolvedTheme, SaveThemeError>;
}
