//! Injected cache collaborator for dictionary and vacancy snapshots
//!
//! The surrounding system keeps these warm at the process level with a
//! 12-hour TTL. The core stays stateless: callers that want caching inject a
//! [`Cache`] implementation and keep passing snapshots explicitly.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default time-to-live, matching the surrounding system's cache policy.
pub const DEFAULT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

pub trait Cache<T> {
    fn get(&self, key: &str) -> Option<T>;
    fn set(&self, key: &str, value: T);
    fn invalidate(&self, key: &str);
}

/// Mutex-guarded in-memory cache with per-entry expiry. Expired entries are
/// dropped on read.
pub struct MemoryCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, T)>>,
}

impl<T: Clone> MemoryCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<T: Clone> Cache<T> for MemoryCache<T> {
    fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some((inserted_at, value)) if inserted_at.elapsed() < self.ttl => Some(value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn set(&self, key: &str, value: T) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(key.to_string(), (Instant::now(), value));
    }

    fn invalidate(&self, key: &str) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.remove(key);
    }
}
