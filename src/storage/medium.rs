use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// A durable string-keyed slot store.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueMedium: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Keeps each key in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

fn unavailable(action: &str, path: &Path, err: std::io::Error) -> Error {
    Error::StorageUnavailable(format!("{} {}: {}", action, path.display(), err))
}

impl KeyValueMedium for FileMedium {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", &path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| unavailable("create", &self.dir, e))?;

        let path = self.slot_path(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        {
            let mut file = fs::File::create(&tmp).map_err(|e| unavailable("create", &tmp, e))?;
            file.write_all(value.as_bytes())
                .and_then(|_| file.sync_all())
                .map_err(|e| unavailable("write", &tmp, e))?;
        }
        // rename replaces the slot in one step, readers never see a half-written file
        fs::rename(&tmp, &path).map_err(|e| unavailable("replace", &path, e))?;
        Ok(())
    }
}

/// Process-local medium. Can be switched offline to behave like an unreachable store.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    slots: Mutex<HashMap<String, String>>,
    offline: AtomicBool,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<()> {
        if self.is_offline() {
            return Err(Error::StorageUnavailable("memory medium is offline".to_string()));
        }
        Ok(())
    }
}

impl KeyValueMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_online()?;
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_online()?;
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
