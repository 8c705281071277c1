use crate::modules::i18n::translations;

/// Supported display languages. Spanish is the session default,
/// matching the original site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Resolve from an `Accept-Language` header value, first match
    /// wins; anything unrecognized falls back to the default.
    pub fn from_accept_language(header: Option<&str>) -> Language {
        let Some(header) = header else {
            return Language::default();
        };

        header
            .split(',')
            .filter_map(|part| {
                let tag = part.split(';').next()?.trim();
                let primary = tag.split('-').next()?;
                Language::from_code(primary)
            })
            .next()
            .unwrap_or_default()
    }
}

/// Pure lookup over the static dictionaries: missing keys resolve
/// to the key itself, never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator;

impl Translator {
    pub fn new() -> Self {
        Self
    }

    pub fn t<'a>(&self, language: Language, key: &'a str) -> &'a str {
        translations::entries(language)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}
