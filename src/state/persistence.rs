use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::state::KeyValueStore;

/// Key-value store backed by a single JSON object on disk.
///
/// The whole file is read on open and rewritten on every mutation. Writes go
/// to a sibling temp file that is then renamed over the state file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// A file that is not a JSON object is moved aside to `<path>.corrupt`
    /// and the store starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str(&content) {
                    Ok(entries) => entries,
                    Err(e) => {
                        let backup = corrupt_path(&path);
                        warn!(
                            path = %path.display(),
                            backup = %backup.display(),
                            error = %e,
                            "state file is corrupt, starting empty"
                        );
                        if let Err(e) = fs::rename(&path, &backup) {
                            warn!(error = %e, "could not move corrupt state file aside");
                        }
                        BTreeMap::new()
                    }
                }
            }
        } else {
            debug!(path = %path.display(), "state file not found, starting empty");
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = temp_path(&self.path);
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

fn temp_path(path: &Path) -> PathBuf {
    with_suffix(path, ".tmp")
}

fn corrupt_path(path: &Path) -> PathBuf {
    with_suffix(path, ".corrupt")
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<Option<String>> {
        let previous = self.entries.remove(key);
        if previous.is_some() {
            self.flush()?;
        }
        Ok(previous)
    }
}

/// Read a JSON value stored under `key`.
///
/// Missing or malformed values yield `T::default()`; malformed ones are logged.
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "ignoring malformed stored value");
            T::default()
        }
    }
}

/// Store `value` as JSON under `key`.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserConfig;
    use crate::state::MemoryStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get("k").is_none());
        store.set("k", "[1,2]".to_string()).unwrap();
        store.set("other", "x".to_string()).unwrap();

        let mut reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").as_deref(), Some("[1,2]"));

        reopened.remove("k").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get("k").is_none());
        assert_eq!(reopened.get("other").as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_empty_file_is_empty_store() {
        let file = NamedTempFile::new().unwrap();
        let store = FileStore::open(file.path()).unwrap();
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn test_file_store_recovers_from_corrupt_container() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let mut store = FileStore::open(file.path()).unwrap();
        assert!(store.get("anything").is_none());
        assert_eq!(
            fs::read_to_string(corrupt_path(file.path())).unwrap(),
            "not json"
        );

        store.set("k", "1".to_string()).unwrap();
        let reopened = FileStore::open(file.path()).unwrap();
        assert_eq!(reopened.get("k").as_deref(), Some("1"));
        fs::remove_file(corrupt_path(file.path())).unwrap();
    }

    #[test]
    fn test_file_store_recovers_from_truncated_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("userConfig", "{\"servingsPerRecipe\":3}".to_string()).unwrap();
        store.set("cart", "{\"entries\":[]}".to_string()).unwrap();

        let full = fs::read_to_string(&path).unwrap();
        fs::write(&path, &full[..full.len() / 2]).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get("userConfig").is_none());
        assert!(dir.path().join("state.json.corrupt").exists());
    }

    #[test]
    fn test_flush_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("k", "v".to_string()).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("state.json.tmp").exists());
    }

    #[test]
    fn test_load_or_default_on_malformed_value() {
        let store = MemoryStore::new().with_entry("userConfig", "{oops");
        let config: UserConfig = load_or_default(&store, "userConfig");
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut config = UserConfig::default();
        config.servings_per_recipe = 5;
        config.allergies.push("gluten".to_string());

        save_json(&mut store, "userConfig", &config).unwrap();
        let loaded: UserConfig = load_or_default(&store, "userConfig");
        assert_eq!(loaded, config);
    }
}
