use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::theme::domain::presets::{
    default_preset, preset_by_key, preset_by_title_color, ThemePreset,
};

pub const THEME_DOC_ID: &str = "theme";

pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_FONT: &str = "system-ui";

/// The `settings/theme` document as stored. Field presence matches
/// the two historical save shapes, so documents written before this
/// service read back unchanged: preset saves carry the class fields,
/// custom saves carry text color and fonts. `preset` is an additive
/// key; legacy documents identify their preset by title color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color_class: Option<String>,
    pub title_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_font: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Custom theme values as submitted from the admin form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTheme {
    pub background_color: String,
    pub title_color: String,
    pub text_color: String,
    pub title_font: String,
    pub text_font: String,
}

impl ThemeDocument {
    pub fn from_preset(preset: &ThemePreset, now: DateTime<Utc>) -> Self {
        Self {
            background_color: preset.background_color.to_string(),
            background_color_class: Some(preset.background_color_class.to_string()),
            title_color: preset.title_color.to_string(),
            title_color_class: Some(preset.title_color_class.to_string()),
            accent_color: Some(preset.accent_color.to_string()),
            accent_color_class: Some(preset.accent_color_class.to_string()),
            text_color: None,
            title_font: None,
            text_font: None,
            is_custom: false,
            preset: Some(preset.key.to_string()),
            updated_at: now,
        }
    }

    pub fn from_custom(custom: CustomTheme, now: DateTime<Utc>) -> Self {
        Self {
            background_color: custom.background_color,
            background_color_class: None,
            title_color: custom.title_color,
            title_color_class: None,
            accent_color: None,
            accent_color_class: None,
            text_color: Some(custom.text_color),
            title_font: Some(custom.title_font),
            text_font: Some(custom.text_font),
            is_custom: true,
            preset: None,
            updated_at: now,
        }
    }
}

/// The theme as both surfaces consume it, every field filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub background_color: String,
    pub title_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub title_font: String,
    pub text_font: String,
    pub is_custom: bool,
    /// Present when the theme is one of the shipped presets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

impl ResolvedTheme {
    fn from_preset(preset: &ThemePreset) -> Self {
        Self {
            background_color: preset.background_color.to_string(),
            title_color: preset.title_color.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            accent_color: preset.accent_color.to_string(),
            title_font: DEFAULT_FONT.to_string(),
            text_font: DEFAULT_FONT.to_string(),
            is_custom: false,
            preset: Some(preset.key.to_string()),
        }
    }
}

/// Resolution order: custom values win; then the stored preset key;
/// then the legacy title-color match; then the default preset. A
/// missing document also resolves to the default.
pub fn resolve(doc: Option<&ThemeDocument>) -> ResolvedTheme {
    let doc = match doc {
        Some(doc) => doc,
        None => return ResolvedTheme::from_preset(default_preset()),
    };

    if doc.is_custom {
        return ResolvedTheme {
            background_color: doc.background_color.clone(),
            title_color: doc.title_color.clone(),
            text_color: doc
                .text_color
                .clone()
                .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
            accent_color: doc
                .accent_color
                .clone()
                .unwrap_or_else(|| doc.title_color.clone()),
            title_font: doc
                .title_font
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT.to_string()),
            text_font: doc
                .text_font
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT.to_string()),
            is_custom: true,
            preset: None,
        };
    }

    let preset = doc
        .preset
        .as_deref()
        .and_then(preset_by_key)
        .or_else(|| preset_by_title_color(&doc.title_color))
        .unwrap_or_else(default_preset);

    ResolvedTheme::from_preset(preset)
}
