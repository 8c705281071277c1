use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use std::env;

use crate::modules::auth::application::ports::outgoing::credential_verifier::{
    CredentialError, CredentialVerifier,
};

/// The single admin account, configured through the environment:
/// `ADMIN_EMAIL` plus `ADMIN_PASSWORD_HASH` (an argon2 PHC string).
/// There is no user table behind this deployment.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash,
        }
    }

    pub fn from_env() -> Self {
        let email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
        let password_hash =
            env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH must be set");

        // Fail at startup, not on the first login attempt.
        if PasswordHash::new(&password_hash).is_err() {
            panic!("ADMIN_PASSWORD_HASH is not a valid PHC hash string");
        }

        Self::new(email, password_hash)
    }
}

impl CredentialVerifier for AdminCredentials {
    fn verify(&self, email: &str, password: &str) -> Result<(), CredentialError> {
        if !email.eq_ignore_ascii_case(&self.email) {
            return Err(CredentialError::UnknownUser);
        }

        let parsed = PasswordHash::new(&self.password_hash)
            .map_err(|e| CredentialError::HashError(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| CredentialError::WrongPassword)
    }
}
