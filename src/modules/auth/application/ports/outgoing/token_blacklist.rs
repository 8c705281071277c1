use uuid::Uuid;

/// Revoked access tokens, tracked by `jti` until their natural
/// expiry. Single-admin deployment keeps this in process memory.
pub trait TokenBlacklist: Send + Sync {
    /// `expires_at` is the token's exp timestamp; entries past it can
    /// be dropped.
    fn revoke(&self, jti: Uuid, expires_at: i64);
    fn is_revoked(&self, jti: &Uuid) -> bool;
}
