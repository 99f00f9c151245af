//! Skill dictionary: canonical skill names and their surface forms

use crate::error::Result;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// Mapping from clean skill name to the surface forms that should normalize
/// to it. Loaded once per session and treated as immutable by the matching
/// layer. The ordered map keeps dictionary iteration (and therefore
/// duplicate-surface-form overwrite order) deterministic.
#[derive(Debug, Clone, Default)]
pub struct SkillDictionary {
    skills: BTreeMap<String, Vec<String>>,
}

impl SkillDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(clean_name, surface_forms)` pairs.
    pub fn from_entries<I, K, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<S>)>,
        K: Into<String>,
        S: Into<String>,
    {
        let skills = entries
            .into_iter()
            .map(|(clean_name, surface_forms)| {
                (
                    clean_name.into(),
                    surface_forms.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { skills }
    }

    /// Load a dictionary from a JSON object of the form
    /// `{ "clean name": ["surface", ...], ... }`.
    ///
    /// A missing file or a payload that is not a JSON object is an error. An
    /// entry whose surface-form list is null or malformed is skipped with a
    /// warning: one bad row degrades coverage, it must not abort the load.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)?;

        let mut skills = BTreeMap::new();
        for (clean_name, value) in raw {
            match serde_json::from_value::<Vec<String>>(value) {
                Ok(surface_forms) => {
                    skills.insert(clean_name, surface_forms);
                }
                Err(err) => {
                    warn!("Skipping dictionary entry '{}': {}", clean_name, err);
                }
            }
        }

        info!(
            "Loaded skill dictionary from {}: {} clean names",
            path.display(),
            skills.len()
        );
        Ok(Self { skills })
    }

    pub fn insert<K, S>(&mut self, clean_name: K, surface_forms: Vec<S>)
    where
        K: Into<String>,
        S: Into<String>,
    {
        self.skills.insert(
            clean_name.into(),
            surface_forms.into_iter().map(Into::into).collect(),
        );
    }

    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Python": ["python", "python3"], "SQL": ["sql"]}}"#
        )
        .unwrap();

        let dictionary = SkillDictionary::from_json_file(file.path()).await.unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.as_map().get("Python").unwrap(),
            &vec!["python".to_string(), "python3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_malformed_entries_are_skipped_not_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Python": ["python"], "Broken": null, "AlsoBroken": 7}}"#
        )
        .unwrap();

        let dictionary = SkillDictionary::from_json_file(file.path()).await.unwrap();
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.as_map().contains_key("Python"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = SkillDictionary::from_json_file(Path::new("no/such/skills.json")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_non_object_payload_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let result = SkillDictionary::from_json_file(file.path()).await;
        assert!(result.is_err());
    }
}
