//! Output module
//! Report payloads and their console/JSON/markdown renderings

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{ExtractionReport, Report, SkillsReport, TailoredVacanciesReport};
