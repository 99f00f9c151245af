//! Resume-to-vacancy matching and ranking

use crate::store::vacancies::VacancyRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Hard cap on the number of tailored vacancies returned to a caller.
pub const MAX_TAILORED_VACANCIES: usize = 200;

/// A vacancy ranked against one resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TailoredVacancy {
    pub url: String,
    pub title: String,
    /// Number of distinct resume skills the vacancy also requires.
    pub skills_frequency: usize,
}

/// Pre-filter: keep only vacancies sharing at least one skill with the
/// resume. A vacancy with an empty skill map (e.g. one whose stored payload
/// was undecodable) simply never qualifies.
pub fn find_suitable_vacancies<'a>(
    resume_skills: &HashSet<String>,
    vacancies: &'a [VacancyRecord],
) -> Vec<&'a VacancyRecord> {
    vacancies
        .iter()
        .filter(|vacancy| {
            vacancy
                .rated_skills
                .keys()
                .any(|skill| resume_skills.contains(skill))
        })
        .collect()
}

/// Rank vacancies by how many distinct resume skills each one requires.
///
/// Occurrence counts inside a vacancy are deliberately ignored; a verbose
/// description must not outweigh one that lists the same skills once.
/// Vacancies identical in `(title, skills_frequency)` collapse to a single
/// representative, the first seen in input order. Results are sorted by
/// `skills_frequency` descending (ties: ascending title, then url) and
/// truncated to [`MAX_TAILORED_VACANCIES`].
pub fn rank_vacancies(
    resume_skills: &HashSet<String>,
    vacancies: &[VacancyRecord],
) -> Vec<TailoredVacancy> {
    let suitable = find_suitable_vacancies(resume_skills, vacancies);
    debug!(
        "{} of {} vacancies share at least one skill with the resume",
        suitable.len(),
        vacancies.len()
    );

    let mut seen: HashSet<(String, usize)> = HashSet::new();
    let mut tailored: Vec<TailoredVacancy> = Vec::new();
    for vacancy in suitable {
        let skills_frequency = vacancy
            .rated_skills
            .keys()
            .filter(|skill| resume_skills.contains(*skill))
            .count();
        if !seen.insert((vacancy.title.clone(), skills_frequency)) {
            continue;
        }
        tailored.push(TailoredVacancy {
            url: vacancy.url.clone(),
            title: vacancy.title.clone(),
            skills_frequency,
        });
    }

    tailored.sort_by(|a, b| {
        b.skills_frequency
            .cmp(&a.skills_frequency)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.url.cmp(&b.url))
    });
    tailored.truncate(MAX_TAILORED_VACANCIES);
    tailored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(url: &str, title: &str, skills: &[&str]) -> VacancyRecord {
        VacancyRecord {
            url: url.to_string(),
            title: title.to_string(),
            rated_skills: skills.iter().map(|skill| (skill.to_string(), 1)).collect(),
        }
    }

    fn resume_skills(skills: &[&str]) -> HashSet<String> {
        skills.iter().map(|skill| skill.to_string()).collect()
    }

    #[test]
    fn test_zero_overlap_vacancies_are_excluded() {
        let skills = resume_skills(&["Python", "SQL"]);
        let vacancies = vec![
            vacancy("a", "X", &["Python"]),
            vacancy("b", "Y", &["Java"]),
        ];

        let ranked = rank_vacancies(&skills, &vacancies);
        assert_eq!(
            ranked,
            vec![TailoredVacancy {
                url: "a".to_string(),
                title: "X".to_string(),
                skills_frequency: 1,
            }]
        );
    }

    #[test]
    fn test_distinct_skill_overlap_ignores_occurrence_counts() {
        let skills = resume_skills(&["Python", "SQL", "Docker"]);
        let mut verbose = vacancy("a", "Backend", &["Python"]);
        verbose.rated_skills.insert("Python".to_string(), 99);
        let concise = vacancy("b", "Data", &["Python", "SQL"]);

        let ranked = rank_vacancies(&skills, &[verbose, concise]);
        assert_eq!(ranked[0].url, "b");
        assert_eq!(ranked[0].skills_frequency, 2);
        assert_eq!(ranked[1].skills_frequency, 1);
    }

    #[test]
    fn test_identical_title_and_score_collapse_to_first_url() {
        let skills = resume_skills(&["Python"]);
        let vacancies = vec![
            vacancy("first", "Python Developer", &["Python"]),
            vacancy("second", "Python Developer", &["Python"]),
            vacancy("third", "Python Engineer", &["Python"]),
        ];

        let ranked = rank_vacancies(&skills, &vacancies);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().any(|v| v.url == "first"));
        assert!(!ranked.iter().any(|v| v.url == "second"));
    }

    #[test]
    fn test_ties_order_by_title_then_url() {
        let skills = resume_skills(&["Python"]);
        let vacancies = vec![
            vacancy("z", "Zeta Role", &["Python"]),
            vacancy("a", "Alpha Role", &["Python"]),
        ];

        let ranked = rank_vacancies(&skills, &vacancies);
        assert_eq!(ranked[0].title, "Alpha Role");
        assert_eq!(ranked[1].title, "Zeta Role");
    }

    #[test]
    fn test_result_is_capped_at_200() {
        let skills = resume_skills(&["Python"]);
        let vacancies: Vec<VacancyRecord> = (0..250)
            .map(|i| vacancy(&format!("url-{i}"), &format!("Role {i}"), &["Python"]))
            .collect();

        let ranked = rank_vacancies(&skills, &vacancies);
        assert_eq!(ranked.len(), MAX_TAILORED_VACANCIES);
    }

    #[test]
    fn test_empty_inputs_return_empty_list() {
        assert!(rank_vacancies(&HashSet::new(), &[]).is_empty());
        assert!(rank_vacancies(&resume_skills(&["Python"]), &[]).is_empty());

        let vacancies = vec![vacancy("a", "X", &["Java"])];
        assert!(rank_vacancies(&HashSet::new(), &vacancies).is_empty());
    }

    #[test]
    fn test_find_suitable_vacancies_prefilter() {
        let skills = resume_skills(&["SQL"]);
        let vacancies = vec![
            vacancy("a", "X", &["SQL", "Java"]),
            vacancy("b", "Y", &[]),
        ];

        let suitable = find_suitable_vacancies(&skills, &vacancies);
        assert_eq!(suitable.len(), 1);
        assert_eq!(suitable[0].url, "a");
    }
}
