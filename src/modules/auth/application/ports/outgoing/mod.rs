pub mod credential_verifier;
pub mod token_blacklist;
pub mod token_provider;
