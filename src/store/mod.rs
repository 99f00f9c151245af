//! Store module
//! Skill dictionaries, vacancy snapshots, and the session cache over both

pub mod cache;
pub mod dictionary;
pub mod vacancies;

pub use cache::{Cache, MemoryCache, DEFAULT_TTL};
pub use dictionary::SkillDictionary;
pub use vacancies::{load_raw_vacancies, RawVacancy, VacancyRecord, VacancySnapshot};

use crate::error::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Session-level access to dictionary and snapshot files with TTL caching,
/// so repeated pipeline steps do not re-read and re-parse the same files.
pub struct StoreManager {
    dictionary_cache: MemoryCache<SkillDictionary>,
    snapshot_cache: MemoryCache<Arc<VacancySnapshot>>,
}

impl StoreManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            dictionary_cache: MemoryCache::new(ttl),
            snapshot_cache: MemoryCache::new(ttl),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    pub async fn dictionary(&self, path: &Path) -> Result<SkillDictionary> {
        let key = path.to_string_lossy().to_string();
        if let Some(dictionary) = self.dictionary_cache.get(&key) {
            info!("Using cached skill dictionary for {}", path.display());
            return Ok(dictionary);
        }
        let dictionary = SkillDictionary::from_json_file(path).await?;
        self.dictionary_cache.set(&key, dictionary.clone());
        Ok(dictionary)
    }

    pub async fn snapshot(&self, path: &Path) -> Result<Arc<VacancySnapshot>> {
        let key = path.to_string_lossy().to_string();
        if let Some(snapshot) = self.snapshot_cache.get(&key) {
            info!("Using cached vacancy snapshot for {}", path.display());
            return Ok(snapshot);
        }
        let snapshot = Arc::new(VacancySnapshot::load(path).await?);
        self.snapshot_cache.set(&key, snapshot.clone());
        Ok(snapshot)
    }

    pub fn invalidate(&self, path: &Path) {
        let key = path.to_string_lossy().to_string();
        self.dictionary_cache.invalidate(&key);
        self.snapshot_cache.invalidate(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_manager_caches_dictionary_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Python": ["python"]}}"#).unwrap();

        let manager = StoreManager::with_default_ttl();
        let first = manager.dictionary(file.path()).await.unwrap();

        // Remove the backing file: the second load must come from the cache.
        let path = file.path().to_path_buf();
        drop(file);
        let second = manager.dictionary(&path).await.unwrap();
        assert_eq!(first.as_map(), second.as_map());

        manager.invalidate(&path);
        assert!(manager.dictionary(&path).await.is_err());
    }
}
