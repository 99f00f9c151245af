//! Ranking module
//! Skill aggregation across vacancies and resume-to-vacancy ranking

pub mod aggregator;
pub mod resume;

pub use aggregator::{aggregate_skills, RatedSkill};
pub use resume::{find_suitable_vacancies, rank_vacancies, TailoredVacancy, MAX_TAILORED_VACANCIES};
