use couch_core::activities::ALL_ACTIVITIES;
use couch_core::{AppError, Args, Translator};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_loaded_catalog_overrides_and_merges() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.json");
    fs::write(&path, r#"{ "pages": "my places", "message": { "hello": "hi {name}" } }"#).unwrap();

    let mut translator = Translator::default();
    translator.load_files(&[&path]).unwrap();

    assert_eq!(translator.t("pages", &Args::new()), "my places");
    assert_eq!(
        translator.t("message.hello", &Args::new().named("name", "Ana")),
        "hi Ana"
    );
    // Untouched siblings stay
    assert_eq!(
        translator.t("message.state", &Args::list(["profile", "saved"])),
        "your profile is now saved"
    );
}

#[test]
fn test_unreadable_catalogs_are_errors() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("fr.json");
    fs::write(&broken, "{ not json").unwrap();

    let mut translator = Translator::default();
    assert!(matches!(
        translator.load_files(&[&broken]),
        Err(AppError::Json(_))
    ));
    assert!(matches!(
        translator.load_files(&[dir.path().join("missing.json")]),
        Err(AppError::Io { .. })
    ));
}

#[test]
fn test_missing_keys() {
    let translator = Translator::default();
    assert_eq!(translator.t("no.such.key", &Args::new()), "no.such.key");
    assert!(matches!(
        translator.try_t("no.such.key", &Args::new()),
        Err(AppError::MissingTranslation { key, .. }) if key == "no.such.key"
    ));
    // A group is not a message
    assert!(!translator.exists("message"));
}

#[test]
fn test_activity_labels_resolve_through_catalog() {
    let translator = Translator::default();
    let mut labels = HashSet::new();
    for activity in ALL_ACTIVITIES {
        let key = format!("allActivities.{}", activity.id);
        let label = translator.try_t(&key, &Args::new()).unwrap();
        assert_eq!(label, activity.label);
        assert!(labels.insert(label), "duplicate label for {}", activity.id);
    }
    assert_eq!(
        translator.t("allActivities.tiràlarc", &Args::new()),
        "tir à l'arc"
    );
}
