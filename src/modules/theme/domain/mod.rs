pub mod presets;
pub mod settings;
