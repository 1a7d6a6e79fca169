//! End-to-end flow over the store and calculator, no prompts involved:
//! persist a profile, compute targets, write them back, reload.

use tempfile::tempdir;

use macro_target_rs::calculator::resolve_targets;
use macro_target_rs::models::{AppliedDefault, Profile};
use macro_target_rs::state::{JsonProfileStore, ProfileStore};

fn complete_profile() -> Profile {
    Profile {
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        age: Some(30),
        gender: Some("male".to_string()),
        workout_frequency: Some("3-5".to_string()),
        difficulty: Some("medium".to_string()),
        targets: None,
    }
}

#[test]
fn test_compute_and_write_back_roundtrip() {
    let dir = tempdir().unwrap();
    let store = JsonProfileStore::new(dir.path().join("profile.json"));

    let mut profile = complete_profile();
    store.save(&profile).unwrap();

    let report = resolve_targets(&profile, None);
    assert!(!report.is_fallback());

    profile.targets = Some(report.targets);
    store.save(&profile).unwrap();

    let reloaded = store.load().unwrap().unwrap();
    assert_eq!(reloaded.targets, Some(report.targets));
    assert_eq!(reloaded.weight_kg, Some(70.0));
}

#[test]
fn test_recompute_after_weight_edit_changes_targets() {
    let dir = tempdir().unwrap();
    let store = JsonProfileStore::new(dir.path().join("profile.json"));

    let mut profile = complete_profile();
    let before = resolve_targets(&profile, None);

    profile.weight_kg = Some(65.0);
    store.save(&profile).unwrap();

    let reloaded = store.load().unwrap().unwrap();
    let after = resolve_targets(&reloaded, None);

    // 5 kg lighter: BMR drops by 50 kcal, so everything downstream moves.
    assert!(after.targets.bmr < before.targets.bmr);
    assert!(after.targets.daily_calorie_target < before.targets.daily_calorie_target);
}

#[test]
fn test_stored_profile_with_unknown_frequency_reports_default() {
    let dir = tempdir().unwrap();
    let store = JsonProfileStore::new(dir.path().join("profile.json"));

    // A stale profile written by an older app version.
    let json = r#"{
        "weightKg": 70.0,
        "heightCm": 175.0,
        "age": 30,
        "gender": "male",
        "workoutFrequency": "sometimes"
    }"#;
    std::fs::write(store.path(), json).unwrap();

    let profile = store.load().unwrap().unwrap();
    let report = resolve_targets(&profile, None);

    assert!(!report.is_fallback());
    // Both frequency (unrecognized) and difficulty (absent) were defaulted.
    assert!(report
        .applied_defaults
        .contains(&AppliedDefault::WorkoutFrequency));
    assert!(report.applied_defaults.contains(&AppliedDefault::Difficulty));
    // Defaulted frequency is "3-5": same numbers as the explicit profile.
    assert_eq!(report.targets.tdee, 2556);
}

#[test]
fn test_fallback_targets_are_never_persisted_implicitly() {
    let dir = tempdir().unwrap();
    let store = JsonProfileStore::new(dir.path().join("profile.json"));

    let profile = Profile {
        weight_kg: Some(70.0),
        ..Profile::default()
    };
    store.save(&profile).unwrap();

    let report = resolve_targets(&profile, None);
    assert!(report.is_fallback());

    // The store holds exactly what was saved; computing never writes.
    let reloaded = store.load().unwrap().unwrap();
    assert!(reloaded.targets.is_none());
}
