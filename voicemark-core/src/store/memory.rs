use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::profile::StoredProfile;
use crate::store::ProfileStore;

struct Entry {
    profile: StoredProfile,
    saved_at: Instant,
    ttl: Duration,
}

/// In-memory store for tests and offline runs. Same expiry semantics as the
/// file store, minus the disk.
#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    slot: Arc<Mutex<Option<Entry>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// TTL recorded by the most recent `set`, for assertions.
    pub fn last_ttl(&self) -> Option<Duration> {
        self.slot.lock().unwrap().as_ref().map(|entry| entry.ttl)
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self) -> Result<Option<StoredProfile>> {
        let slot = self.slot.lock().unwrap();
        Ok(slot.as_ref().and_then(|entry| {
            if entry.saved_at.elapsed() >= entry.ttl {
                None
            } else {
                Some(entry.profile.clone())
            }
        }))
    }

    fn set(&self, profile: &StoredProfile, ttl: Duration) -> Result<()> {
        *self.slot.lock().unwrap() = Some(Entry {
            profile: profile.clone(),
            saved_at: Instant::now(),
            ttl,
        });
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{prepare_for_storage, StyleProfile};

    #[test]
    fn set_get_delete_cycle() {
        let store = MemoryProfileStore::new();
        assert!(store.get().unwrap().is_none());

        let profile = prepare_for_storage(&StyleProfile::builtin_default());
        store.set(&profile, Duration::from_secs(60)).unwrap();
        assert_eq!(store.get().unwrap(), Some(profile));
        assert_eq!(store.last_ttl(), Some(Duration::from_secs(60)));

        store.delete().unwrap();
        assert!(store.get().unwrap().is_none());
        assert_eq!(store.last_ttl(), None);
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let store = MemoryProfileStore::new();
        let profile = prepare_for_storage(&StyleProfile::builtin_default());
        store.set(&profile, Duration::ZERO).unwrap();
        assert!(store.get().unwrap().is_none());
    }
}
