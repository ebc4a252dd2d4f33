//! Commit message tool integration tests
//!
//! Drives the generation pipeline end to end with a scripted generator:
//! input validation, error surfacing, and the single-request guard on
//! the application state.

use ai_roadmap::core::error::{Result, RoadmapError};
use ai_roadmap::curriculum::CurriculumRegistry;
use ai_roadmap::llm::{generate_commit_message, TextGenerator};
use ai_roadmap::selection::SelectionController;
use ai_roadmap::ui::App;
use std::sync::atomic::{AtomicUsize, Ordering};

struct ScriptedGenerator {
    response: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn ok(message: &str) -> Self {
        Self {
            response: Ok(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(message) => Ok(message.clone()),
            Err(reason) => Err(RoadmapError::Generation(reason.clone())),
        }
    }
}

fn git_unit_app() -> App {
    let mut controller = SelectionController::new(CurriculumRegistry::builtin())
        .expect("builtin curriculum has steps");
    controller.select_skill("Git & version control").unwrap();
    App::new(controller)
}

#[tokio::test]
async fn test_blank_description_never_reaches_the_generator() {
    let generator = ScriptedGenerator::ok("feat: something");
    let err = generate_commit_message(&generator, "  \n ").await.unwrap_err();

    match err {
        RoadmapError::Generation(msg) => assert_eq!(msg, "Please describe your changes."),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_generator_failure_surfaces_the_reason() {
    let generator = ScriptedGenerator::failing("API error: 503 upstream unavailable");
    let err = generate_commit_message(&generator, "reworked the cache eviction")
        .await
        .unwrap_err();

    match err {
        RoadmapError::Generation(msg) => {
            assert!(msg.starts_with("Failed to generate commit message:"));
            assert!(msg.contains("503 upstream unavailable"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn test_app_round_trip_success() {
    let generator = ScriptedGenerator::ok("feat: add user authentication feature\n");
    let mut app = git_unit_app();
    app.commit_input = "added user auth with sessions".into();

    let description = app.begin_generation().expect("request starts");
    assert!(app.busy);

    let outcome = generate_commit_message(&generator, &description)
        .await
        .map_err(|e| e.to_string());
    app.finish_generation(outcome);

    assert!(!app.busy);
    assert_eq!(
        app.commit_output.as_deref(),
        Some("feat: add user authentication feature")
    );
    assert!(app.commit_error.is_none());
}

#[tokio::test]
async fn test_app_failure_leaves_tool_retryable() {
    let generator = ScriptedGenerator::failing("connection reset");
    let mut app = git_unit_app();
    app.commit_input = "tightened the request timeout".into();

    let description = app.begin_generation().expect("request starts");
    let outcome = generate_commit_message(&generator, &description)
        .await
        .map_err(|e| match e {
            RoadmapError::Generation(msg) => msg,
            other => other.to_string(),
        });
    app.finish_generation(outcome);

    assert!(!app.busy);
    assert!(app.commit_output.is_none());
    let error = app.commit_error.as_deref().unwrap_or("");
    assert!(error.contains("connection reset"));

    // The tool is idle again; the same description can be resubmitted.
    assert!(app.begin_generation().is_some());
}

#[test]
fn test_empty_input_in_app_sets_message_without_request() {
    let mut app = git_unit_app();
    app.commit_input = "   ".into();

    assert!(app.begin_generation().is_none());
    assert!(!app.busy);
    assert_eq!(app.commit_error.as_deref(), Some("Please describe your changes."));
}

#[test]
fn test_navigation_dismisses_stale_output() {
    let mut app = git_unit_app();
    app.commit_output = Some("feat: old result".into());
    app.commit_error = None;

    app.controller.next_step();
    app.clear_commit_results();

    assert!(app.commit_output.is_none());
    assert!(app.commit_error.is_none());
}
