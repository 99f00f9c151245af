//! Skill aggregation across vacancies

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a ranked skill list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatedSkill {
    pub skill: String,
    pub frequency: u32,
}

/// Merge per-document skill counts into one ranked list.
///
/// Counts for the same clean name are summed across documents; a missing
/// document (`None`, e.g. a vacancy whose extraction failed upstream)
/// contributes nothing. The result is sorted by frequency descending with
/// ascending skill name as the tie-break, so equal-frequency ordering is a
/// stable, documented contract rather than map iteration order.
///
/// `limit` truncates after sorting; `None` returns everything and `Some(0)`
/// is valid and returns an empty list. Empty input yields an empty list,
/// never an error.
pub fn aggregate_skills<'a, I>(per_document_counts: I, limit: Option<usize>) -> Vec<RatedSkill>
where
    I: IntoIterator<Item = Option<&'a HashMap<String, u32>>>,
{
    let mut totals: HashMap<String, u32> = HashMap::new();
    for counts in per_document_counts.into_iter().flatten() {
        for (skill, count) in counts {
            *totals.entry(skill.clone()).or_insert(0) += count;
        }
    }

    let mut rated: Vec<RatedSkill> = totals
        .into_iter()
        .map(|(skill, frequency)| RatedSkill { skill, frequency })
        .collect();
    rated.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.skill.cmp(&b.skill))
    });

    if let Some(limit) = limit {
        rated.truncate(limit);
    }
    rated
}
