use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;

/// In-process blacklist of revoked token ids. Entries are purged once
/// the token they belong to would have expired anyway.
#[derive(Default)]
pub struct InMemoryTokenBlacklist {
    revoked: Mutex<HashMap<Uuid, i64>>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenBlacklist for InMemoryTokenBlacklist {
    fn revoke(&self, jti: Uuid, expires_at: i64) {
        let now = Utc::now().timestamp();
        let mut revoked = match self.revoked.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(jti, expires_at);
    }

    fn is_revoked(&self, jti: &Uuid) -> bool {
        let now = Utc::now().timestamp();
        let revoked = match self.revoked.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        revoked.get(jti).is_some_and(|exp| *exp > now)
    }
}
