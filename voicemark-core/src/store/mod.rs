pub mod file;
pub mod memory;

pub use file::FileProfileStore;
pub use memory::MemoryProfileStore;

use std::time::Duration;

use anyhow::Result;

use crate::profile::StoredProfile;

/// Session-scoped storage for exactly one profile per client.
///
/// Absence and expiry both read back as `Ok(None)`. Implementations also
/// swallow unreadable blobs the same way (after logging) so a damaged store
/// never blocks generation; `Err` is reserved for I/O faults.
pub trait ProfileStore: Send + Sync {
    fn get(&self) -> Result<Option<StoredProfile>>;

    fn set(&self, profile: &StoredProfile, ttl: Duration) -> Result<()>;

    fn delete(&self) -> Result<()>;
}
