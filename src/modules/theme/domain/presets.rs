/// One of the five shipped color schemes. Hex values and Tailwind
/// class names are carried verbatim from the original stylesheet so
/// stored documents keep rendering identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    /// Stable identifier persisted in the settings document.
    pub key: &'static str,
    pub name: &'static str,
    pub background_color: &'static str,
    pub background_color_class: &'static str,
    pub title_color: &'static str,
    pub title_color_class: &'static str,
    pub accent_color: &'static str,
    pub accent_color_class: &'static str,
}

pub const THEME_PRESETS: [ThemePreset; 5] = [
    ThemePreset {
        key: "classic-purple",
        name: "Púrpura Clásico",
        background_color: "#111827",
        background_color_class: "bg-gray-900",
        title_color: "#a78bfa",
        title_color_class: "text-purple-400",
        accent_color: "#c084fc",
        accent_color_class: "text-purple-500",
    },
    ThemePreset {
        key: "modern-blue",
        name: "Azul Moderno",
        background_color: "#0f172a",
        background_color_class: "bg-slate-950",
        title_color: "#60a5fa",
        title_color_class: "text-blue-400",
        accent_color: "#3b82f6",
        accent_color_class: "text-blue-500",
    },
    ThemePreset {
        key: "nature-green",
        name: "Verde Naturaleza",
        background_color: "#1a2e1a",
        background_color_class: "bg-green-950",
        title_color: "#10b981",
        title_color_class: "text-green-500",
        accent_color: "#34d399",
        accent_color_class: "text-green-400",
    },
    ThemePreset {
        key: "passion-red",
        name: "Rojo Pasión",
        background_color: "#1f1213",
        background_color_class: "bg-red-950",
        title_color: "#f87171",
        title_color_class: "text-red-400",
        accent_color: "#ef4444",
        accent_color_class: "text-red-500",
    },
    ThemePreset {
        key: "energy-orange",
        name: "Naranja Energía",
        background_color: "#1e1a16",
        background_color_class: "bg-orange-950",
        title_color: "#fb923c",
        title_color_class: "text-orange-400",
        accent_color: "#f97316",
        accent_color_class: "text-orange-500",
    },
];

/// The fallback when nothing is stored.
pub fn default_preset() -> &'static ThemePreset {
    &THEME_PRESETS[0]
}

pub fn preset_by_key(key: &str) -> Option<&'static ThemePreset> {
    THEME_PRESETS.iter().find(|p| p.key == key)
}

/// Documents written before the preset key existed are identified by
/// their title color, which is unique across presets.
pub fn preset_by_title_color(title_color: &str) -> Option<&'static ThemePreset> {
    THEME_PRESETS.iter().find(|p| p.title_color == title_color)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub value: &'static str,
    pub label: &'static str,
    pub font_family: &'static str,
}

pub const FONT_OPTIONS: [FontOption; 8] = [
    FontOption {
        value: "system-ui",
        label: "Sistema (Por defecto)",
        font_family: "system-ui",
    },
    FontOption {
        value: "serif",
        label: "Serif Clásico",
        font_family: "Georgia, serif",
    },
    FontOption {
        value: "sans-serif-modern",
        label: "Sans-Serif Moderno",
        font_family: "\"Trebuchet MS\", sans-serif",
    },
    FontOption {
        value: "monospace",
        label: "Monoespaciada",
        font_family: "\"Courier New\", monospace",
    },
    FontOption {
        value: "cursive",
        label: "Cursiva Elegante",
        font_family: "cursive",
    },
    FontOption {
        value: "display",
        label: "Display Bold",
        font_family: "Impact, Charcoal, sans-serif",
    },
    FontOption {
        value: "comic",
        label: "Comic Sans MS",
        font_family: "\"Comic Sans MS\", cursive",
    },
    FontOption {
        value: "garamond",
        label: "Garamond",
        font_family: "Garamond, serif",
    },
];

pub fn font_by_value(value: &str) -> Option<&'static FontOption> {
    FONT_OPTIONS.iter().find(|f| f.value == value)
}
