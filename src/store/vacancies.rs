//! Vacancy records and snapshots
//!
//! A vacancy's `rated_skills` travels as a JSON-encoded string of
//! skill -> count, matching the storage format of the surrounding system;
//! the codec here round-trips that representation losslessly.

use crate::error::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use unicode_segmentation::UnicodeSegmentation;

/// A scraped vacancy before skill extraction, as produced by the external
/// scraping layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVacancy {
    pub url: String,
    pub title: String,
    pub content: String,
}

/// A vacancy with its precomputed skill counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VacancyRecord {
    pub url: String,
    pub title: String,
    #[serde(with = "rated_skills_codec", default)]
    pub rated_skills: HashMap<String, u32>,
}

/// Serialize `rated_skills` as a JSON-encoded string field and tolerate
/// null/corrupt payloads on read (they decode to an empty map, matching the
/// system's tolerance for partial scraping failures upstream).
mod rated_skills_codec {
    use super::*;
    use serde::{Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(map: &HashMap<String, u32>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Ordered view for a deterministic encoding.
        let ordered: BTreeMap<&String, &u32> = map.iter().collect();
        let encoded = serde_json::to_string(&ordered).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<HashMap<String, u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(encoded) = raw else {
            return Ok(HashMap::new());
        };
        match serde_json::from_str(&encoded) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!("Undecodable rated_skills payload treated as empty: {}", err);
                Ok(HashMap::new())
            }
        }
    }
}

/// An immutable set of vacancies taken at one point in time. Callers pass a
/// snapshot explicitly into the ranking functions; nothing here assumes the
/// snapshot is stable across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySnapshot {
    pub generated_at: DateTime<Utc>,
    pub vacancies: Vec<VacancyRecord>,
}

impl VacancySnapshot {
    pub fn new(vacancies: Vec<VacancyRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            vacancies,
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let snapshot: VacancySnapshot = serde_json::from_str(&content)?;
        info!(
            "Loaded vacancy snapshot from {}: {} vacancies (generated {})",
            path.display(),
            snapshot.vacancies.len(),
            snapshot.generated_at
        );
        Ok(snapshot)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// In-memory stand-in for the job-title text search: a vacancy matches
    /// when every word of the query appears as a word of its title,
    /// case-insensitively. An empty query matches nothing.
    pub fn search_by_title(&self, query: &str) -> Vec<&VacancyRecord> {
        let query_words: Vec<String> = query
            .unicode_words()
            .map(|word| word.to_lowercase())
            .collect();
        if query_words.is_empty() {
            return Vec::new();
        }

        self.vacancies
            .iter()
            .filter(|vacancy| {
                let title_words: std::collections::HashSet<String> = vacancy
                    .title
                    .unicode_words()
                    .map(|word| word.to_lowercase())
                    .collect();
                query_words.iter().all(|word| title_words.contains(word))
            })
            .collect()
    }
}

/// Load the raw vacancies produced by the external scraping layer.
pub async fn load_raw_vacancies(path: &Path) -> Result<Vec<RawVacancy>> {
    let content = fs::read_to_string(path).await?;
    let raw: Vec<RawVacancy> = serde_json::from_str(&content)?;
    info!("Loaded {} raw vacancies from {}", raw.len(), path.display());
    Ok(raw)
}
