//! Report payloads produced by the pipelines

use crate::ranking::{RatedSkill, TailoredVacancy};
use serde::{Deserialize, Serialize};

/// Ranked skills for a job-title query, in the shape the surrounding API
/// serves: query echo, result-set size, ranked skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsReport {
    pub vacancy_name: String,
    pub number_of_vacancies: usize,
    pub rated_skills: Vec<RatedSkill>,
}

/// Vacancies tailored to one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoredVacanciesReport {
    pub vacancies: Vec<TailoredVacancy>,
}

/// Skill counts extracted from a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub source: String,
    pub skills: Vec<RatedSkill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    Skills(SkillsReport),
    TailoredVacancies(TailoredVacanciesReport),
    Extraction(ExtractionReport),
}
