use std::fmt;

#[derive(Debug, Clone)]
pub enum CredentialError {
    /// The email does not belong to the configured admin account.
    UnknownUser,
    WrongPassword,
    HashError(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::UnknownUser => write!(f, "unknown user"),
            CredentialError::WrongPassword => write!(f, "wrong password"),
            CredentialError::HashError(msg) => write!(f, "hash error: {}", msg),
        }
    }
}

/// Checks a login attempt against the configured admin account.
/// Verification is CPU-bound, no I/O involved.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> Result<(), CredentialError>;
}
