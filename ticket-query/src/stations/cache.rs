//! Disk cache for the station table.

use std::path::{Path, PathBuf};

use super::error::StationError;
use super::table::StationTable;

/// Default cache file name, placed in the cache directory.
pub const CACHE_FILE_NAME: &str = ".cities";

/// Outcome of reading the cache file.
#[derive(Debug)]
pub enum CacheLoad {
    /// A usable, non-empty table.
    Hit(StationTable),
    /// No cache file.
    Missing,
    /// The file exists but is unreadable, not a table, or empty.
    Invalid(String),
}

/// Configuration for the station disk cache.
#[derive(Debug, Clone)]
pub struct StationCacheConfig {
    /// Path to the cache file.
    pub path: PathBuf,
}

impl StationCacheConfig {
    /// Create a new cache config with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache file inside `dir`, using the default file name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CACHE_FILE_NAME))
    }
}

impl Default for StationCacheConfig {
    fn default() -> Self {
        Self::new(CACHE_FILE_NAME)
    }
}

/// Disk cache for the station table.
///
/// There is no expiry: a cached table stays authoritative until the file is
/// removed or a refresh overwrites it.
#[derive(Debug, Clone)]
pub struct StationCache {
    config: StationCacheConfig,
}

impl StationCache {
    /// Create a new station cache with the given config.
    pub fn new(config: StationCacheConfig) -> Self {
        Self { config }
    }

    /// Read the cache file.
    pub fn load(&self) -> CacheLoad {
        let contents = match std::fs::read_to_string(&self.config.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CacheLoad::Missing,
            Err(e) => return CacheLoad::Invalid(format!("failed to read cache file: {e}")),
        };

        match serde_json::from_str::<StationTable>(&contents) {
            Ok(table) if table.is_empty() => CacheLoad::Invalid("cache file is empty".to_string()),
            Ok(table) => CacheLoad::Hit(table),
            Err(e) => CacheLoad::Invalid(format!("failed to parse cache file: {e}")),
        }
    }

    /// Save the table to the cache.
    ///
    /// Writes to a sibling temporary file and renames it into place, so the
    /// cache file is either the old table or the new one, never a partial
    /// write. Creates parent directories if they don't exist.
    pub fn save(&self, table: &StationTable) -> Result<(), StationError> {
        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StationError::Cache {
                message: format!("failed to create cache directory: {}", e),
            })?;
        }

        let json = serde_json::to_string(table).map_err(|e| StationError::Cache {
            message: format!("failed to serialize cache: {}", e),
        })?;

        let tmp = self.config.path.with_extension("tmp");
        std::fs::write(&tmp, json).map_err(|e| StationError::Cache {
            message: format!("failed to write cache file: {}", e),
        })?;
        std::fs::rename(&tmp, &self.config.path).map_err(|e| StationError::Cache {
            message: format!("failed to replace cache file: {}", e),
        })?;

        Ok(())
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationCode;
    use tempfile::tempdir;

    fn sample() -> StationTable {
        let mut table = StationTable::new();
        table.insert("北京", StationCode::parse("BJP").unwrap());
        table.insert("广州南", StationCode::parse("IZQ").unwrap());
        table.insert("唐家湾", StationCode::parse("PKQ").unwrap());
        table
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let cache = StationCache::new(StationCacheConfig::in_dir(dir.path()));

        cache.save(&sample()).unwrap();

        match cache.load() {
            CacheLoad::Hit(table) => assert_eq!(table, sample()),
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn missing_cache() {
        let cache = StationCache::new(StationCacheConfig::new("/nonexistent/path/.cities"));
        assert!(matches!(cache.load(), CacheLoad::Missing));
    }

    #[test]
    fn empty_object_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".cities");
        std::fs::write(&path, "{}").unwrap();

        let cache = StationCache::new(StationCacheConfig::new(&path));
        assert!(matches!(cache.load(), CacheLoad::Invalid(_)));
    }

    #[test]
    fn corrupt_file_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".cities");
        std::fs::write(&path, "{\"北京\": \"BJ").unwrap();

        let cache = StationCache::new(StationCacheConfig::new(&path));
        assert!(matches!(cache.load(), CacheLoad::Invalid(_)));
    }

    #[test]
    fn bad_code_in_file_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".cities");
        std::fs::write(&path, r#"{"北京": "bjp"}"#).unwrap();

        let cache = StationCache::new(StationCacheConfig::new(&path));
        assert!(matches!(cache.load(), CacheLoad::Invalid(_)));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let cache = StationCache::new(StationCacheConfig::in_dir(dir.path()));
        cache.save(&sample()).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(".cities")]);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let cache_path = dir.path().join("nested").join("dir").join(".cities");
        let cache = StationCache::new(StationCacheConfig::new(&cache_path));

        cache.save(&sample()).unwrap();
        assert!(cache_path.exists());
        assert_eq!(cache.path(), cache_path);
    }
}
