use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;

use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, DocumentStore, StoreError,
};
use crate::modules::theme::application::ports::incoming::use_cases::{
    GetThemeError, GetThemeUseCase, SaveThemeError, SaveThemeUseCase, ThemeUpdate,
};
use crate::modules::theme::domain::presets::{font_by_value, preset_by_key};
use crate::modules::theme::domain::settings::{
    resolve, CustomTheme, ResolvedTheme, ThemeDocument, THEME_DOC_ID,
};

pub struct ThemeService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> ThemeService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Option<ThemeDocument>, StoreError> {
        let doc = self.store.get(Collection::Settings, THEME_DOC_ID).await?;
        match doc {
            Some(doc) => serde_json::from_value(doc.data)
                .map(Some)
                .map_err(|e| StoreError::SerializationError(e.to_string())),
            None => Ok(None),
        }
    }
}

fn validate_custom(custom: &CustomTheme) -> Result<(), SaveThemeError> {
    let hex = hex_color_pattern();
    let checks: [(&'static str, &str); 3] = [
        ("backgroundColor", &custom.background_color),
        ("titleColor", &custom.title_color),
        ("textColor", &custom.text_color),
    ];
    for (field, value) in checks {
        if !hex.is_match(value) {
            return Err(SaveThemeError::InvalidColor { field });
        }
    }
    if font_by_value(&custom.title_font).is_none() {
        return Err(SaveThemeError::UnknownFont { field: "titleFont" });
    }
    if font_by_value(&custom.text_font).is_none() {
        return Err(SaveThemeError::UnknownFont { field: "textFont" });
    }
    Ok(())
}

fn hex_color_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex pattern is a valid regex"))
}

#[async_trait]
impl<S: DocumentStore> GetThemeUseCase for ThemeService<S> {
    async fn execute(&self) -> Result<ResolvedTheme, GetThemeError> {
        let doc = self.load().await.map_err(GetThemeError::StoreError)?;
        Ok(resolve(doc.as_ref()))
    }
}

#[async_trait]
impl<S: DocumentStore> SaveThemeUseCase for ThemeService<S> {
    async fn execute(&self, update: ThemeUpdate) -> Result<ResolvedTheme, SaveThemeError> {
        let doc = match update {
            ThemeUpdate::Preset { key } => {
                let preset = preset_by_key(&key)
                    .ok_or_else(|| SaveThemeError::UnknownPreset(key.clone()))?;
                ThemeDocument::from_preset(preset, Utc::now())
            }
            ThemeUpdate::Custom(custom) => {
                validate_custom(&custom)?;
                ThemeDocument::from_custom(custom, Utc::now())
            }
        };

        let data = serde_json::to_value(&doc).map_err(|e| {
            SaveThemeError::StoreError(StoreError::SerializationError(e.to_string()))
        })?;
        self.store
            .set(Collection::Settings, THEME_DOC_ID, data)
            .await
            .map_err(SaveThemeError::StoreError)?;

        Ok(resolve(Some(&doc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::application::ports::outgoing::document_store::{
        Document, MockDocumentStore,
    };
    use serde_json::json;

    fn custom() -> CustomTheme {
        CustomTheme {
            background_color: "#101010".to_string(),
            title_color: "#ffaa00".to_string(),
            text_color: "#dddddd".to_string(),
            title_font: "serif".to_string(),
            text_font: "system-ui".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_get_without_stored_document_returns_default_preset() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .withf(|c, id| *c == Collection::Settings && id == "theme")
            .returning(|_, _| Ok(None));

        let service = ThemeService::new(Arc::new(store));
        let theme = GetThemeUseCase::execute(&service).await.unwrap();

        assert_eq!(theme.preset.as_deref(), Some("classic-purple"));
        assert!(!theme.is_custom);
    }

    #[actix_web::test]
    async fn test_save_preset_writes_legacy_shape_and_resolves() {
        let mut store = MockDocumentStore::new();
        store
            .expect_set()
            .withf(|c, id, data| {
                *c == Collection::Settings
                    && id == "theme"
                    && data["preset"] == json!("nature-green")
                    && data["titleColorClass"] == json!("text-green-500")
                    && data["isCustom"] == json!(false)
                    && data.get("textColor").is_none()
            })
            .returning(|_, _, _| Ok(()));

        let service = ThemeService::new(Arc::new(store));
        let theme = SaveThemeUseCase::execute(
            &service,
            ThemeUpdate::Preset {
                key: "nature-green".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(theme.preset.as_deref(), Some("nature-green"));
        assert_eq!(theme.title_color, "#10b981");
    }

    #[actix_web::test]
    async fn test_save_custom_round_trips_through_get() {
        let mut store = MockDocumentStore::new();
        let written = std::sync::Arc::new(std::sync::Mutex::new(None));
        let sink = written.clone();
        store.expect_set().returning(move |_, _, data| {
            *sink.lock().unwrap() = Some(data);
            Ok(())
        });
        let source = written.clone();
        store.expect_get().returning(move |_, _| {
            Ok(source
                .lock()
                .unwrap()
                .clone()
                .map(|data| Document::new("theme", data)))
        });

        let service = ThemeService::new(Arc::new(store));
        let saved = SaveThemeUseCase::execute(&service, ThemeUpdate::Custom(custom()))
            .await
            .unwrap();
        let loaded = GetThemeUseCase::execute(&service).await.unwrap();

        assert_eq!(saved, loaded);
        assert!(loaded.is_custom);
        assert_eq!(loaded.background_color, "#101010");
        assert_eq!(loaded.title_font, "serif");
    }

    #[actix_web::test]
    async fn test_save_unknown_preset_is_rejected_without_write() {
        let mut store = MockDocumentStore::new();
        store.expect_set().times(0);

        let service = ThemeService::new(Arc::new(store));
        let err = SaveThemeUseCase::execute(
            &service,
            ThemeUpdate::Preset {
                key: "neon-pink".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SaveThemeError::UnknownPreset(key) if key == "neon-pink"));
    }

    #[actix_web::test]
    async fn test_save_custom_rejects_malformed_color() {
        let mut store = MockDocumentStore::new();
        store.expect_set().times(0);

        let mut bad = custom();
        bad.title_color = "red".to_string();

        let service = ThemeService::new(Arc::new(store));
        let err = SaveThemeUseCase::execute(&service, ThemeUpdate::Custom(bad))
            .await
            .unwrap_err();

        assert!(matches!(err, SaveThemeError::InvalidColor { field: "titleColor" }));
    }

    #[actix_web::test]
    async fn test_save_custom_rejects_font_outside_catalog() {
        let mut store = MockDocumentStore::new();
        store.expect_set().times(0);

        let mut bad = custom();
        bad.text_font = "papyrus".to_string();

        let service = ThemeService::new(Arc::new(store));
        let err = SaveThemeUseCase::execute(&service, ThemeUpdate::Custom(bad))
            .await
            .unwrap_err();

        assert!(matches!(err, SaveThemeError::UnknownFont { field: "textFont" }));
    }
}
