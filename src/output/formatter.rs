//! Output formatters: console, JSON, and markdown renderings of reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::{ExtractionReport, Report, SkillsReport, TailoredVacanciesReport};
use crate::ranking::RatedSkill;
use colored::Colorize;

/// How many rows the console view shows unless detailed output is on.
const CONSOLE_ROW_LIMIT: usize = 20;

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn skill_rows(&self, skills: &[RatedSkill], out: &mut String) {
        let shown = if self.detailed {
            skills.len()
        } else {
            skills.len().min(CONSOLE_ROW_LIMIT)
        };
        for (index, rated) in skills.iter().take(shown).enumerate() {
            out.push_str(&format!(
                "{:>4}. {:<30} {}\n",
                index + 1,
                rated.skill,
                rated.frequency
            ));
        }
        if shown < skills.len() {
            out.push_str(&self.dim(&format!("      ... and {} more\n", skills.len() - shown)));
        }
    }

    fn format_skills(&self, report: &SkillsReport) -> String {
        let mut out = String::new();
        out.push_str(&self.heading(&format!(
            "Skills for \"{}\" ({} vacancies)\n\n",
            report.vacancy_name, report.number_of_vacancies
        )));
        if report.rated_skills.is_empty() {
            out.push_str("No skills found.\n");
        } else {
            self.skill_rows(&report.rated_skills, &mut out);
        }
        out
    }

    fn format_tailored(&self, report: &TailoredVacanciesReport) -> String {
        let mut out = String::new();
        out.push_str(&self.heading(&format!(
            "Tailored vacancies ({})\n\n",
            report.vacancies.len()
        )));
        if report.vacancies.is_empty() {
            out.push_str("No suitable vacancies found.\n");
            return out;
        }
        for (index, vacancy) in report.vacancies.iter().enumerate() {
            out.push_str(&format!(
                "{:>4}. {} ({} matching skills)\n      {}\n",
                index + 1,
                vacancy.title,
                vacancy.skills_frequency,
                self.dim(&vacancy.url)
            ));
        }
        out
    }

    fn format_extraction(&self, report: &ExtractionReport) -> String {
        let mut out = String::new();
        out.push_str(&self.heading(&format!("Skills in {}\n\n", report.source)));
        if report.skills.is_empty() {
            out.push_str("No skills found.\n");
        } else {
            self.skill_rows(&report.skills, &mut out);
        }
        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Skills(skills) => self.format_skills(skills),
            Report::TailoredVacancies(tailored) => self.format_tailored(tailored),
            Report::Extraction(extraction) => self.format_extraction(extraction),
        })
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }
}

impl MarkdownFormatter {
    fn skill_table(skills: &[RatedSkill], out: &mut String) {
        out.push_str("| # | Skill | Frequency |\n|---|-------|-----------|\n");
        for (index, rated) in skills.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                index + 1,
                rated.skill,
                rated.frequency
            ));
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        match report {
            Report::Skills(skills) => {
                out.push_str(&format!(
                    "# Skills for \"{}\"\n\n{} matching vacancies\n\n",
                    skills.vacancy_name, skills.number_of_vacancies
                ));
                Self::skill_table(&skills.rated_skills, &mut out);
            }
            Report::TailoredVacancies(tailored) => {
                out.push_str("# Tailored vacancies\n\n");
                out.push_str("| # | Title | Matching skills | URL |\n|---|-------|-----------------|-----|\n");
                for (index, vacancy) in tailored.vacancies.iter().enumerate() {
                    out.push_str(&format!(
                        "| {} | {} | {} | {} |\n",
                        index + 1,
                        vacancy.title,
                        vacancy.skills_frequency,
                        vacancy.url
                    ));
                }
            }
            Report::Extraction(extraction) => {
                out.push_str(&format!("# Skills in {}\n\n", extraction.source));
                Self::skill_table(&extraction.skills, &mut out);
            }
        }
        Ok(out)
    }
}

/// Coordinates the configured formatter for the CLI.
pub struct ReportGenerator {
    config: OutputConfig,
}

impl ReportGenerator {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, report: &Report) -> Result<String> {
        match self.config.format {
            OutputFormat::Console => {
                ConsoleFormatter::new(self.config.color_output, self.config.detailed)
                    .format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }
}
