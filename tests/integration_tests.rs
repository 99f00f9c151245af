//! Integration tests for the skillhunter pipelines

use skillhunter::input::InputManager;
use skillhunter::matching::{KeywordMatcher, SkillExtractor};
use skillhunter::ranking::{aggregate_skills, rank_vacancies};
use skillhunter::store::{load_raw_vacancies, SkillDictionary, VacancyRecord, VacancySnapshot};
use std::path::Path;

async fn fixture_dictionary() -> SkillDictionary {
    SkillDictionary::from_json_file(Path::new("tests/fixtures/skills.json"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_extract_skills_from_plain_text_resume() {
    let dictionary = fixture_dictionary().await;
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let extractor = SkillExtractor::new(&dictionary);
    let counts = extractor.extract(&text);

    assert_eq!(counts.get("Python"), Some(&2));
    assert_eq!(counts.get("SQL"), Some(&2));
    assert_eq!(counts.get("Docker"), Some(&2));
    assert!(!counts.contains_key("JavaScript"));
}

#[tokio::test]
async fn test_extract_skills_from_markdown_resume() {
    let dictionary = fixture_dictionary().await;
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    // Markdown markers must not leak into keyword scanning.
    assert!(!text.contains("**"));
    assert!(!text.contains('#'));

    let skills = SkillExtractor::new(&dictionary).distinct_skills(&text);
    assert!(skills.contains("Python"));
    assert!(skills.contains("SQL"));
    assert!(skills.contains("Docker"));
}

#[tokio::test]
async fn test_scan_pipeline_rates_vacancies_and_round_trips() {
    let dictionary = fixture_dictionary().await;
    let raw_vacancies = load_raw_vacancies(Path::new("tests/fixtures/raw_vacancies.json"))
        .await
        .unwrap();

    let extractor = SkillExtractor::new(&dictionary);
    let records: Vec<VacancyRecord> = raw_vacancies
        .into_iter()
        .map(|vacancy| VacancyRecord {
            url: vacancy.url,
            title: vacancy.title,
            rated_skills: extractor.extract(&vacancy.content),
        })
        .collect();

    assert_eq!(records[0].rated_skills.get("Python"), Some(&2));
    assert_eq!(records[0].rated_skills.get("SQL"), Some(&1));
    assert_eq!(records[1].rated_skills.get("JavaScript"), Some(&3));
    assert_eq!(records[2].rated_skills.get("AWS"), Some(&2));

    let snapshot = VacancySnapshot::new(records);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    snapshot.save(&path).await.unwrap();

    let reloaded = VacancySnapshot::load(&path).await.unwrap();
    assert_eq!(reloaded.vacancies, snapshot.vacancies);
}

#[tokio::test]
async fn test_skills_for_job_title_query() {
    let snapshot = VacancySnapshot::load(Path::new("tests/fixtures/vacancies.json"))
        .await
        .unwrap();

    let matching = snapshot.search_by_title("python");
    assert_eq!(matching.len(), 2);

    let rated = aggregate_skills(matching.iter().map(|v| Some(&v.rated_skills)), None);
    assert_eq!(rated[0].skill, "Python");
    assert_eq!(rated[0].frequency, 6);
    assert_eq!(rated[1].skill, "SQL");

    let limited = aggregate_skills(matching.iter().map(|v| Some(&v.rated_skills)), Some(1));
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn test_resume_matching_pipeline() {
    let dictionary = fixture_dictionary().await;
    let snapshot = VacancySnapshot::load(Path::new("tests/fixtures/vacancies.json"))
        .await
        .unwrap();

    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let resume_skills = SkillExtractor::new(&dictionary).distinct_skills(&resume_text);

    let ranked = rank_vacancies(&resume_skills, &snapshot.vacancies);

    // Both Python vacancies share two skills with the resume; the
    // JavaScript-only vacancy and the one with no decodable skills are out.
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|v| v.skills_frequency == 2));
    assert_eq!(ranked[0].title, "Python Engineer");
    assert_eq!(ranked[1].title, "Senior Python Developer");
    assert!(!ranked.iter().any(|v| v.url.ends_with("/3")));
    assert!(!ranked.iter().any(|v| v.url.ends_with("/4")));
}

#[test]
fn test_keyword_file_feeds_a_matcher() {
    let mut matcher = KeywordMatcher::new();
    let added = matcher
        .add_keywords_from_file(Path::new("tests/fixtures/skills.txt"))
        .unwrap();

    assert_eq!(added, 5);
    assert_eq!(
        matcher.extract_keywords("py and golang on kubernetes"),
        vec!["Python", "Go", "kubernetes"]
    );
}

#[tokio::test]
async fn test_input_manager_caches_extractions() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type_is_an_error() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file_is_an_error() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}
