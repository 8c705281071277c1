pub mod get_public_theme;
pub mod get_theme;
pub mod put_theme;

pub use get_public_theme::get_public_theme_handler;
pub use get_theme::get_theme_handler;
pub use put_theme::{put_theme_handler, CustomThemeDto, ThemeUpdateDto};
