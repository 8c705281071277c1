pub mod admin_credentials;
pub mod jwt;
pub mod token_blacklist_memory;
