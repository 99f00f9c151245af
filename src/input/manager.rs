//! Input manager routing documents to the right extractor

use crate::error::{Result, SkillHunterError};
use crate::input::text_extractor::{
    DocumentKind, MarkdownExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    markdown: MarkdownExtractor,
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            markdown: MarkdownExtractor::new(),
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillHunterError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let kind = DocumentKind::from_path(path).ok_or_else(|| {
            SkillHunterError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))
        })?;

        let text = match kind {
            DocumentKind::PlainText => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            DocumentKind::Markdown => {
                info!("Processing markdown file: {}", path.display());
                self.markdown.extract(path).await?
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
