//! Skill extraction: dictionary + matcher -> per-document skill counts

use crate::matching::trie::KeywordMatcher;
use crate::store::dictionary::SkillDictionary;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Extracts skill occurrence counts from free text using a skill dictionary.
///
/// The matcher is built once per extractor, so one instance can scan many
/// vacancy documents without re-indexing the dictionary.
pub struct SkillExtractor {
    matcher: KeywordMatcher,
}

impl SkillExtractor {
    /// Build a case-insensitive extractor from a skill dictionary.
    pub fn new(dictionary: &SkillDictionary) -> Self {
        Self::with_case_sensitivity(dictionary, false)
    }

    /// Build an extractor with explicit case handling.
    pub fn with_case_sensitivity(dictionary: &SkillDictionary, case_sensitive: bool) -> Self {
        let mut matcher = if case_sensitive {
            KeywordMatcher::case_sensitive()
        } else {
            KeywordMatcher::new()
        };
        matcher.add_keywords_from_dict(dictionary.as_map());
        debug!(
            "Skill extractor ready: {} clean names, {} surface forms",
            dictionary.len(),
            matcher.keyword_count()
        );
        Self { matcher }
    }

    /// Wrap a pre-built matcher, e.g. one loaded from a keyword file.
    pub fn with_matcher(matcher: KeywordMatcher) -> Self {
        Self { matcher }
    }

    /// Count skill occurrences in one document. The same skill mentioned
    /// three times counts 3. No matches is a normal outcome: the map is
    /// simply empty.
    pub fn extract(&self, text: &str) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for label in self.matcher.extract_keywords(text) {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// The distinct skills found in one document, used for resume matching
    /// where occurrence counts do not matter.
    pub fn distinct_skills(&self, text: &str) -> HashSet<String> {
        self.matcher.extract_keywords(text).into_iter().collect()
    }
}

/// One-shot convenience over [`SkillExtractor`]: extract the skill count map
/// of a single document.
pub fn extract_skills(text: &str, dictionary: &SkillDictionary) -> HashMap<String, u32> {
    SkillExtractor::new(dictionary).extract(text)
}
