pub mod auth;
pub mod content;
pub mod i18n;
pub mod store;
pub mod theme;
