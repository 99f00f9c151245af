//! Text extraction for resume and vacancy documents
//!
//! Documents arrive as plain text or markdown; PDF resumes are converted to
//! text upstream before they reach this layer.

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Markdown,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        match extension.to_lowercase().as_str() {
            "txt" => Some(DocumentKind::PlainText),
            "md" | "markdown" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }
}

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

/// Markdown extractor that walks parser events and keeps only the rendered
/// text, so headings, lists and emphasis markers do not leak into keyword
/// scanning.
pub struct MarkdownExtractor {
    blank_lines: Regex,
}

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self {
            blank_lines: Regex::new(r"\n{3,}").expect("Invalid blank-line regex"),
        }
    }
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;

        let mut text = String::new();
        for event in Parser::new(&markdown) {
            match event {
                Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item) => {
                    text.push_str("\n\n");
                }
                _ => {}
            }
        }

        let collapsed = self.blank_lines.replace_all(&text, "\n\n");
        Ok(collapsed.trim().to_string())
    }
}
