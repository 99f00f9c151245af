//! Trie-based multi-pattern keyword matching
//!
//! The matcher indexes surface forms of known skills and scans free text for
//! whole-word occurrences, reporting the canonical label for each hit. It is
//! a plain trie walked as a state machine, without Aho-Corasick failure
//! links: on a failed partial match the scan restarts one character after the
//! attempt's start position. Worst-case rescanning is O(n * m) for
//! pathological inputs (n text characters, m longest keyword), which is a
//! known limitation and acceptable for job-description-sized documents.

use crate::error::Result;
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Canonical label when this node terminates a registered keyword.
    clean_name: Option<String>,
}

impl TrieNode {
    fn insert(&mut self, keyword: &str, clean_name: String) {
        let mut node = self;
        for ch in keyword.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.clean_name = Some(clean_name);
    }
}

/// Multi-pattern keyword matcher over a frozen trie.
///
/// Keywords are registered up front; scanning never mutates the trie, so a
/// built matcher can be shared read-only across threads.
pub struct KeywordMatcher {
    root: TrieNode,
    case_sensitive: bool,
    keyword_count: usize,
}

impl KeywordMatcher {
    /// Case-insensitive matcher (the default for skill dictionaries).
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            case_sensitive: false,
            keyword_count: 0,
        }
    }

    /// Matcher that takes keywords and text verbatim.
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
            ..Self::new()
        }
    }

    fn normalize(&self, text: &str) -> String {
        if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    }

    /// Number of registration calls that stored a keyword, overwrites
    /// included.
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    /// Register a keyword. Without a clean name the normalized keyword labels
    /// itself. Registering the same keyword again overwrites the previous
    /// label (last write wins). Empty keywords can never match and are
    /// skipped.
    pub fn add_keyword(&mut self, keyword: &str, clean_name: Option<&str>) {
        let normalized = self.normalize(keyword);
        if normalized.is_empty() {
            warn!("Ignoring empty keyword");
            return;
        }
        let label = match clean_name {
            Some(name) => name.to_string(),
            None => normalized.clone(),
        };
        self.root.insert(&normalized, label);
        self.keyword_count += 1;
    }

    /// Register every surface form of a clean-name -> surface-forms mapping.
    /// Iteration order decides which label survives when the same surface
    /// form appears under several clean names.
    pub fn add_keywords_from_dict(&mut self, mapping: &BTreeMap<String, Vec<String>>) {
        for (clean_name, keywords) in mapping {
            for keyword in keywords {
                self.add_keyword(keyword, Some(clean_name.as_str()));
            }
        }
        debug!(
            "Matcher holds {} keywords after dictionary load",
            self.keyword_count
        );
    }

    /// Load keywords from a UTF-8 file with one `surface => clean` pair per
    /// line. Lines without `=>` (or with an empty right-hand side) register
    /// the surface form as its own label. A missing file is an error; blank
    /// lines are skipped. Returns the number of registered lines.
    pub fn add_keywords_from_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let mut added = 0;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once("=>") {
                Some((surface, clean)) => {
                    let clean = clean.trim();
                    if clean.is_empty() {
                        self.add_keyword(surface.trim(), None);
                    } else {
                        self.add_keyword(surface.trim(), Some(clean));
                    }
                }
                None => self.add_keyword(line, None),
            }
            added += 1;
        }
        debug!("Loaded {} keywords from {}", added, path.display());
        Ok(added)
    }

    /// Extract every non-overlapping whole-word occurrence of a registered
    /// keyword, one label per occurrence in text order. Duplicates are
    /// expected; they are the basis for frequency counting.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.scan(text).into_iter().map(|(label, _, _)| label).collect()
    }

    /// Like [`extract_keywords`](Self::extract_keywords) but with the
    /// `(label, start, end)` span of each match. Offsets are character
    /// positions into the normalized (lower-cased) text, end exclusive.
    pub fn extract_keywords_with_spans(&self, text: &str) -> Vec<(String, usize, usize)> {
        self.scan(text)
    }

    fn scan(&self, text: &str) -> Vec<(String, usize, usize)> {
        let chars: Vec<char> = self.normalize(text).chars().collect();
        let mut matches = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            // A match may only begin at the text start or after a
            // non-alphanumeric character.
            if start > 0 && chars[start - 1].is_alphanumeric() {
                start += 1;
                continue;
            }
            match self.walk_from(&chars, start) {
                Some((label, end)) => {
                    matches.push((label.to_string(), start, end));
                    start = end;
                }
                None => start += 1,
            }
        }

        matches
    }

    /// Walk the trie from `start`, accepting the first terminal node whose
    /// following position is the text end or a non-alphanumeric character.
    fn walk_from(&self, chars: &[char], start: usize) -> Option<(&str, usize)> {
        let mut node = &self.root;
        let mut pos = start;

        while pos < chars.len() {
            node = node.children.get(&chars[pos])?;
            pos += 1;
            if let Some(label) = node.clean_name.as_deref() {
                if pos == chars.len() || !chars[pos].is_alphanumeric() {
                    return Some((label, pos));
                }
            }
        }

        None
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}
