//! Integration tests for CLI functionality
//!
//! These tests drive the task loader and the analysis engine together
//! over real files. Unit tests for individual functions live in the
//! respective module files.

use chrono::NaiveDate;
use std::fs;
use taskrank::analysis::{analyze_tasks_at, suggest_tasks_at};
use taskrank::cli::{FileError, TaskLoader};
use tempfile::TempDir;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

#[test]
fn json_array_file_round_trips_through_analysis() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("tasks.json");
    fs::write(
        &file,
        r#"[
            {"id": 1, "title": "Ship release", "due_date": "2026-03-10",
             "estimated_hours": 2, "importance": 9, "dependencies": []},
            {"id": 2, "title": "Update docs", "due_date": "2026-04-01",
             "estimated_hours": 4, "importance": 4, "dependencies": [1]}
        ]"#,
    )
    .unwrap();

    let tasks = TaskLoader::load(&file).unwrap();
    assert_eq!(tasks.len(), 2);

    let result = analyze_tasks_at(&tasks, "smart_balance", reference_date());
    assert_eq!(result.total_tasks, 2);
    assert_eq!(result.tasks[0].title, "Ship release");
    assert_eq!(result.tasks[0].rank, 1);
    assert!(result.circular_dependencies.is_empty());
    assert!(result.validation_errors.is_empty());
}

#[test]
fn wrapped_json_object_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("batch.json");
    fs::write(
        &file,
        r#"{"tasks": [{"id": "a", "title": "Lonely task", "importance": 6}]}"#,
    )
    .unwrap();

    let tasks = TaskLoader::load(&file).unwrap();
    assert_eq!(tasks.len(), 1);
}

#[test]
fn toml_tables_are_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("tasks.toml");
    fs::write(
        &file,
        r#"
[[tasks]]
id = 1
title = "Plan sprint"
due_date = "2026-03-12"
estimated_hours = 1.5
importance = 7
dependencies = []

[[tasks]]
id = 2
title = "Retro notes"
importance = 3
"#,
    )
    .unwrap();

    let tasks = TaskLoader::load(&file).unwrap();
    assert_eq!(tasks.len(), 2);

    let result = suggest_tasks_at(&tasks, 1, "deadline_driven", reference_date());
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].task.title, "Plan sprint");
    assert!(!result.suggestions[0].reasons.is_empty());
}

#[test]
fn malformed_fields_survive_loading_and_get_reported() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("messy.json");
    fs::write(
        &file,
        r#"[
            {"title": "", "due_date": "someday", "estimated_hours": "lots",
             "importance": "high", "dependencies": "1,2"},
            {"id": 9, "title": "Healthy", "importance": 5}
        ]"#,
    )
    .unwrap();

    let tasks = TaskLoader::load(&file).unwrap();
    let result = analyze_tasks_at(&tasks, "smart_balance", reference_date());

    // The malformed task is repaired, reported, and still ranked.
    assert_eq!(result.total_tasks, 2);
    assert_eq!(result.validation_errors.len(), 1);
    assert_eq!(result.validation_errors[0].task_index, 0);
    assert_eq!(result.validation_errors[0].errors.len(), 5);
    assert!(result.tasks.iter().any(|t| t.title == "Untitled Task"));
}

#[test]
fn missing_file_is_a_not_found_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");
    match TaskLoader::load(&missing) {
        Err(FileError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn empty_batch_is_rejected_at_the_boundary() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("empty.json");
    fs::write(&file, "[]").unwrap();
    assert!(matches!(
        TaskLoader::load(&file),
        Err(FileError::Empty { .. })
    ));
}

#[test]
fn garbage_content_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("garbage.json");
    fs::write(&file, "this is not json").unwrap();
    assert!(matches!(
        TaskLoader::load(&file),
        Err(FileError::Parse { .. })
    ));
}
