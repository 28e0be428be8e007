use chrono::{TimeZone, Utc};
use persona_scale::quiz::export::{write_export, ExportFormat};
use persona_scale::quiz::presets::find_preset;
use persona_scale::quiz::share::{answers_from_url, build_share_url};
use persona_scale::quiz::storage::{FileStore, QuizStateRepository, Screen, StoredState};
use persona_scale::quiz::{sanity_check, AnswerSet, ContentCatalog, ScoringEngine};
use std::fs;

#[test]
fn answering_sharing_and_exporting_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let engine = ScoringEngine::standard();
    let mut repository = QuizStateRepository::new(FileStore::new(dir.path().join("state.json")));

    let mut state = StoredState::default();
    for item in engine.catalog().items().iter().take(10) {
        state.answers.record(item.id, 6).expect("valid score");
    }
    state.current_screen = Screen::Quiz;
    repository.save(&state).expect("partial state saves");

    let resumed = repository.load().expect("loads").expect("present");
    assert!(resumed.is_incomplete(engine.catalog().len()));
    assert!(!engine.is_complete(&resumed.answers));

    let answers = find_preset("nfp_t")
        .expect("preset exists")
        .answers(engine.catalog());
    let result = engine.classify(&answers);
    assert_eq!(result.full_type_with_variant(), "INFP-T");

    let url = build_share_url("https://quiz.example/", &answers).expect("link fits");
    let shared = answers_from_url(&url).expect("decodes").expect("present");
    assert_eq!(shared, answers);
    assert_eq!(engine.classify(&shared), result);

    let generated_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let path = write_export(
        dir.path(),
        ExportFormat::Csv,
        &answers,
        &result,
        engine.catalog(),
        generated_at,
    )
    .expect("export written");
    let csv = fs::read_to_string(&path).expect("export readable");
    assert!(csv.contains("Full Type,INFP-T"));
    assert!(csv.contains("Core Type,NFP"));
    assert!(path
        .to_string_lossy()
        .ends_with(&format!("personality_results_{}.csv", generated_at.timestamp_millis())));
}

#[test]
fn partial_answers_still_score_deterministically() {
    let engine = ScoringEngine::standard();
    let answers = AnswerSet::from_pairs([(1, 7), (2, 7), (3, 7), (4, 1)]).expect("valid");

    let first = engine.classify_traced(&answers);
    let second = engine.classify_traced(&answers);
    assert_eq!(first, second);
    assert_eq!(first.result.interaction().key(), "E");
}

#[test]
fn built_in_content_describes_every_outcome() {
    assert!(sanity_check(&ContentCatalog::standard()).is_empty());
}
