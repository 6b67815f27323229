use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::profile::StoredProfile;
use crate::store::ProfileStore;

/// On-disk envelope around a stored profile. `saved_at` is unix seconds.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEnvelope {
    saved_at: i64,
    ttl_seconds: u64,
    profile: StoredProfile,
}

/// One JSON file per client under the store directory.
///
/// Expiry is enforced on read: a blob older than its recorded TTL reads back
/// as absent and the file is removed best-effort. An unparseable blob is
/// moved aside to `<client>.json.corrupt` and also reads back as absent.
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(dir: impl Into<PathBuf>, client: &str) -> Result<Self> {
        if !is_valid_client_id(client) {
            bail!("invalid client id {client:?}: use letters, digits, '-' or '_'");
        }
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create profile directory {}", dir.display()))?;
        Ok(Self {
            path: dir.join(format!("{client}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_valid_client_id(client: &str) -> bool {
    !client.is_empty()
        && client
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl ProfileStore for FileProfileStore {
    fn get(&self) -> Result<Option<StoredProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read profile from {}", self.path.display()))?;

        let envelope: StoredEnvelope = match serde_json::from_str(&contents) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "Stored profile is unreadable, moving it aside"
                );
                let backup = self.path.with_extension("json.corrupt");
                if let Err(rename_error) = fs::rename(&self.path, &backup) {
                    warn!(%rename_error, "Failed to move corrupt profile aside");
                }
                return Ok(None);
            }
        };

        // Compare in the u64 domain so a TTL beyond i64 range cannot wrap
        // negative; a clock that moved backwards reads as age zero.
        let elapsed = Utc::now().timestamp().saturating_sub(envelope.saved_at);
        let age = u64::try_from(elapsed).unwrap_or(0);
        if age >= envelope.ttl_seconds {
            debug!(path = %self.path.display(), age_seconds = age, "Stored profile expired");
            let _ = fs::remove_file(&self.path);
            return Ok(None);
        }

        Ok(Some(envelope.profile))
    }

    fn set(&self, profile: &StoredProfile, ttl: Duration) -> Result<()> {
        let envelope = StoredEnvelope {
            saved_at: Utc::now().timestamp(),
            ttl_seconds: ttl.as_secs(),
            profile: profile.clone(),
        };
        let json =
            serde_json::to_string_pretty(&envelope).context("Failed to serialize profile")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write profile to {}", self.path.display()))?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error)
                .with_context(|| format!("Failed to delete profile at {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{prepare_for_storage, StyleProfile};
    use tempfile::TempDir;

    fn stored_profile() -> StoredProfile {
        prepare_for_storage(&StyleProfile::builtin_default())
    }

    const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    #[test]
    fn round_trips_a_profile() {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(dir.path(), "alice").unwrap();
        assert!(store.get().unwrap().is_none());

        store.set(&stored_profile(), WEEK).unwrap();
        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded, stored_profile());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(dir.path(), "alice").unwrap();
        store.delete().unwrap();

        store.set(&stored_profile(), WEEK).unwrap();
        store.delete().unwrap();
        assert!(store.get().unwrap().is_none());
        store.delete().unwrap();
    }

    #[test]
    fn expired_profile_reads_back_as_absent_and_is_removed() {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(dir.path(), "alice").unwrap();
        store.set(&stored_profile(), Duration::ZERO).unwrap();

        assert!(store.get().unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_blob_reads_back_as_absent_and_is_moved_aside() {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(dir.path(), "alice").unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.get().unwrap().is_none());
        assert!(!store.path().exists());
        assert!(dir.path().join("alice.json.corrupt").exists());

        // Next save works again
        store.set(&stored_profile(), WEEK).unwrap();
        assert!(store.get().unwrap().is_some());
    }

    #[test]
    fn clients_are_isolated() {
        let dir = TempDir::new().unwrap();
        let alice = FileProfileStore::new(dir.path(), "alice").unwrap();
        let bob = FileProfileStore::new(dir.path(), "bob").unwrap();

        alice.set(&stored_profile(), WEEK).unwrap();
        assert!(alice.get().unwrap().is_some());
        assert!(bob.get().unwrap().is_none());

        alice.delete().unwrap();
        assert!(alice.get().unwrap().is_none());
    }

    #[test]
    fn rejects_client_ids_that_escape_the_directory() {
        let dir = TempDir::new().unwrap();
        assert!(FileProfileStore::new(dir.path(), "../evil").is_err());
        assert!(FileProfileStore::new(dir.path(), "").is_err());
        assert!(FileProfileStore::new(dir.path(), "a b").is_err());
        assert!(FileProfileStore::new(dir.path(), "team_7-alpha").is_ok());
    }

    #[test]
    fn envelope_records_ttl_in_seconds() {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(dir.path(), "alice").unwrap();
        store.set(&stored_profile(), WEEK).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["ttl_seconds"], 604800);
        assert!(value["saved_at"].as_i64().unwrap() > 0);
        assert!(value["profile"].is_object());
    }
}
