//! In-memory pokemon info cache with TTL.
//! Key: the name exactly as the caller supplied it (case-sensitive).
//! Entries are evicted lazily on the next lookup past expiry.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use pokedex_core::pokemon::PokemonInfo;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    info: PokemonInfo,
    inserted_at: Instant,
}

pub struct InfoCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl InfoCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Look up a cached record. Returns None if absent or expired.
    pub fn get(&self, name: &str) -> Option<PokemonInfo> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get(name) {
            if entry.inserted_at.elapsed() < self.ttl {
                return Some(entry.info.clone());
            }
            // Expired, drop it
            entries.remove(name);
        }
        None
    }

    /// Insert a record, overwriting any existing entry for the name.
    pub fn insert(&self, name: &str, info: PokemonInfo) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            name.to_string(),
            CacheEntry {
                info,
                inserted_at: Instant::now(),
            },
        );
    }
}

impl Default for InfoCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
