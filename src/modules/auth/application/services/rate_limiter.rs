use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const MAX_FAILURES: usize = 5;
pub const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Per-email sliding window of failed login attempts. Five failures
/// inside fifteen minutes lock the account until the oldest failure
/// ages out; a successful login clears the slate. Entries whose
/// window has fully aged out are dropped, so the map stays bounded
/// by the set of recently failing emails.
pub struct LoginRateLimiter {
    window: Duration,
    failures: Mutex<HashMap<String, Vec<Instant>>>,
}

impl LoginRateLimiter {
    pub fn new() -> Self {
        Self::with_window(WINDOW)
    }

    fn with_window(window: Duration) -> Self {
        Self {
            window,
            failures: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_limited(&self, email: &str) -> bool {
        let now = Instant::now();
        let mut failures = match self.failures.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let remaining = match failures.get_mut(email) {
            Some(attempts) => {
                attempts.retain(|at| now.duration_since(*at) < self.window);
                attempts.len()
            }
            None => return false,
        };
        if remaining == 0 {
            failures.remove(email);
        }
        remaining >= MAX_FAILURES
    }

    pub fn register_failure(&self, email: &str) {
        let now = Instant::now();
        let mut failures = match self.failures.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Drop every email whose attempts have all aged out, not just
        // the one being recorded.
        failures.retain(|_, attempts| {
            attempts.retain(|at| now.duration_since(*at) < self.window);
            !attempts.is_empty()
        });

        failures.entry(email.to_string()).or_default().push(now);
    }

    pub fn reset(&self, email: &str) {
        let mut failures = match self.failures.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        failures.remove(email);
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
