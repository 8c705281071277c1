pub mod translations;
pub mod translator;

pub use translator::{Language, Translator};
