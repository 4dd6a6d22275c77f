//! Device-local progress tier: one JSON document per storage key.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::Result;

use super::record::{LegacyRecord, ProgressRecord};

/// Storage key for the current progress shape.
#[must_use]
pub fn fused_key(user_id: &str) -> String {
    format!("fused_progress::{user_id}")
}

/// Storage key of the pre-rework shape, read once for migration.
#[must_use]
pub fn legacy_key(user_id: &str) -> String {
    format!("maturity_progress::{user_id}")
}

/// Raw key-value tier under the progress store. Payloads are opaque JSON
/// strings at this level.
pub trait LocalTier: Send {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, payload: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: LocalTier + Sync + ?Sized> LocalTier for std::sync::Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        (**self).write(key, payload)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// File-backed tier: one file per key under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys embed `::`; keep filenames portable.
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl LocalTier for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        debug!(key = %key, path = %path.display(), "local progress written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory tier for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalTier for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Outcome of loading local progress for a user.
#[derive(Debug, Default)]
pub struct LocalLoad {
    pub record: Option<ProgressRecord>,
    /// Loaded via the legacy key and lifted to the current shape.
    pub migrated_from_legacy: bool,
    /// The current-shape payload existed but did not parse. The payload is
    /// left on disk untouched for inspection.
    pub corrupt: bool,
}

/// Typed progress access over a raw local tier.
pub struct LocalProgress<T: LocalTier> {
    tier: T,
}

impl<T: LocalTier> LocalProgress<T> {
    pub fn new(tier: T) -> Self {
        Self { tier }
    }

    /// Load the user's local progress, falling back to the legacy shape.
    /// A corrupt payload is treated as absent, never deleted.
    pub fn load(&self, user_id: &str) -> Result<LocalLoad> {
        if let Some(payload) = self.tier.read(&fused_key(user_id))? {
            match serde_json::from_str::<ProgressRecord>(&payload) {
                Ok(record) => {
                    return Ok(LocalLoad {
                        record: Some(record),
                        ..LocalLoad::default()
                    })
                }
                Err(e) => {
                    warn!(user = %user_id, error = %e, "corrupt local progress, ignoring payload");
                    let mut load = self.load_legacy(user_id)?;
                    load.corrupt = true;
                    return Ok(load);
                }
            }
        }
        self.load_legacy(user_id)
    }

    fn load_legacy(&self, user_id: &str) -> Result<LocalLoad> {
        let Some(payload) = self.tier.read(&legacy_key(user_id))? else {
            return Ok(LocalLoad::default());
        };
        match serde_json::from_str::<LegacyRecord>(&payload) {
            Ok(legacy) => {
                debug!(user = %user_id, "migrated progress from legacy key");
                Ok(LocalLoad {
                    record: Some(legacy.migrate()),
                    migrated_from_legacy: true,
                    corrupt: false,
                })
            }
            Err(e) => {
                warn!(user = %user_id, error = %e, "corrupt legacy progress, ignoring payload");
                Ok(LocalLoad {
                    corrupt: true,
                    ..LocalLoad::default()
                })
            }
        }
    }

    /// Persist under the current-shape key.
    pub fn save(&self, user_id: &str, record: &ProgressRecord) -> Result<()> {
        let payload = serde_json::to_string(record)?;
        self.tier.write(&fused_key(user_id), &payload)
    }

    /// Drop the legacy key. Called once the migrated replacement has been
    /// written under the current key.
    pub fn remove_legacy(&self, user_id: &str) -> Result<()> {
        self.tier.remove(&legacy_key(user_id))
    }

    /// Drop both the current and legacy keys.
    pub fn clear(&self, user_id: &str) -> Result<()> {
        self.tier.remove(&fused_key(user_id))?;
        self.tier.remove(&legacy_key(user_id))
    }

    pub fn tier(&self) -> &T {
        &self.tier
    }

    /// Raw payload check used by the reset command.
    pub fn has_any(&self, user_id: &str) -> Result<bool> {
        Ok(self.tier.read(&fused_key(user_id))?.is_some()
            || self.tier.read(&legacy_key(user_id))?.is_some())
    }
}
