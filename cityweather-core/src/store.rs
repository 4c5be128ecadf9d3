use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{collections::HashMap, fs, path::PathBuf};

/// Key under which the last searched city is remembered.
pub const LAST_CITY_KEY: &str = "lastCity";

/// Durable string key-value store for small user preferences.
///
/// The production implementation writes a TOML file under the platform
/// config directory; tests use [`MemoryPreferenceStore`].
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed preference store. The whole map is read at open time and
/// rewritten on every set.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at the platform default location.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Self::open(dirs.config_dir().join("preferences.toml"))
    }

    /// Open the store at an explicit path. A missing file reads as empty.
    pub fn open(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences file: {}", path.display()))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse preferences file: {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self { path, values })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(&self.values)
            .context("Failed to serialize preferences to TOML")?;

        fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write preferences file: {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Ephemeral in-memory store. Nothing survives the process; used in tests
/// and anywhere persistence is unwanted.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get(LAST_CITY_KEY), None);

        store.set(LAST_CITY_KEY, "Paris").unwrap();
        assert_eq!(store.get(LAST_CITY_KEY), Some("Paris".to_string()));

        store.set(LAST_CITY_KEY, "Kyiv").unwrap();
        assert_eq!(store.get(LAST_CITY_KEY), Some("Kyiv".to_string()));
    }

    #[test]
    fn file_store_reads_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("preferences.toml")).unwrap();

        assert_eq!(store.get(LAST_CITY_KEY), None);
    }

    #[test]
    fn file_store_persists_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut store = FilePreferenceStore::open(path.clone()).unwrap();
        store.set(LAST_CITY_KEY, "Paris").unwrap();

        let reopened = FilePreferenceStore::open(path).unwrap();
        assert_eq!(reopened.get(LAST_CITY_KEY), Some("Paris".to_string()));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("preferences.toml");

        let mut store = FilePreferenceStore::open(path.clone()).unwrap();
        store.set(LAST_CITY_KEY, "Lviv").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn file_store_overwrites_on_every_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut store = FilePreferenceStore::open(path.clone()).unwrap();
        store.set(LAST_CITY_KEY, "Paris").unwrap();
        store.set(LAST_CITY_KEY, "Kyiv").unwrap();

        let reopened = FilePreferenceStore::open(path).unwrap();
        assert_eq!(reopened.get(LAST_CITY_KEY), Some("Kyiv".to_string()));
    }
}
