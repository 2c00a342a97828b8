//! Tests for the input gate and sequential invoker

use gemini_client::{FakeBackend, GeminiError};
use leetcode_mentor::mentor::pipeline::{
    invoke_roles, run_submission, save_transcript, SessionConfig, EMPTY_STATEMENT_MESSAGE,
    GENERATION_FAILED_MESSAGE, MISSING_KEY_MESSAGE,
};
use leetcode_mentor::mentor::presenter::{PresenterEvent, RecordingPresenter};
use leetcode_mentor::mentor::types::{GenerationResult, RoleKind};

use super::common::{submission_with, two_sum_submission};

fn config_with_key(api_key: Option<&str>) -> SessionConfig {
    SessionConfig {
        api_key: api_key.map(String::from),
        model: "gemini-2.0-flash-exp".to_string(),
        timeout_secs: 120,
        output: None,
    }
}

#[tokio::test]
async fn test_empty_statement_invokes_nothing_and_warns_once() {
    let config = config_with_key(Some("test-key"));
    let mut presenter = RecordingPresenter::new();

    let results = run_submission(&config, &submission_with("   \n\t"), &mut presenter)
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(presenter.warnings(), vec![EMPTY_STATEMENT_MESSAGE]);
    assert!(presenter.errors().is_empty());
    assert!(presenter.sections().is_empty());
}

#[tokio::test]
async fn test_missing_credential_invokes_nothing_and_errors_once() {
    let config = config_with_key(None);
    let mut presenter = RecordingPresenter::new();

    let results = run_submission(&config, &two_sum_submission(), &mut presenter)
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(presenter.errors(), vec![MISSING_KEY_MESSAGE]);
    assert!(presenter.warnings().is_empty());
    assert!(presenter.sections().is_empty());
}

#[tokio::test]
async fn test_missing_credential_reported_regardless_of_statement() {
    // Credential check comes first even when the statement is also empty.
    let config = config_with_key(None);
    let mut presenter = RecordingPresenter::new();

    run_submission(&config, &submission_with(""), &mut presenter)
        .await
        .unwrap();

    assert_eq!(presenter.errors(), vec![MISSING_KEY_MESSAGE]);
    assert!(presenter.warnings().is_empty());
}

#[tokio::test]
async fn test_valid_submission_makes_four_calls_in_order() {
    let backend = FakeBackend::always_ok("mentoring output");
    let mut presenter = RecordingPresenter::new();

    let results = invoke_roles(&backend, &two_sum_submission(), &mut presenter).await;

    assert_eq!(backend.call_count(), 4);
    assert_eq!(results.len(), 4);

    let roles: Vec<RoleKind> = results.iter().map(|r| r.role).collect();
    assert_eq!(roles, RoleKind::ALL.to_vec());

    // Call order is visible in the prompts: the first is the bare context,
    // the rest carry their role's framing.
    let requests = backend.requests();
    assert!(requests[0].prompt.starts_with("Problem:"));
    assert!(requests[1].prompt.starts_with("Explain this problem in depth:"));
    assert!(requests[2]
        .prompt
        .starts_with("Provide multiple solution approaches for:"));
    assert!(requests[3]
        .prompt
        .starts_with("Provide problem-solving insights and strategies for:"));
}

#[tokio::test]
async fn test_every_prompt_contains_statement_difficulty_and_language() {
    let backend = FakeBackend::always_ok("ok");
    let mut presenter = RecordingPresenter::new();

    invoke_roles(&backend, &two_sum_submission(), &mut presenter).await;

    for request in backend.requests() {
        assert!(request.prompt.contains("Two Sum"));
        assert!(request.prompt.contains("Easy"));
        assert!(request.prompt.contains("Python"));
    }
}

#[tokio::test]
async fn test_sections_render_incrementally_in_role_order() {
    let backend = FakeBackend::always_ok("content");
    let mut presenter = RecordingPresenter::new();

    invoke_roles(&backend, &two_sum_submission(), &mut presenter).await;

    assert_eq!(
        presenter.sections(),
        vec![
            "Problem Analysis",
            "Deep Problem Understanding",
            "Solution Approaches",
            "Problem Solver's Mindset",
        ]
    );

    // Each section is preceded by its own working indicator; no batching.
    let mut expected = Vec::new();
    for role in [
        ("Analyzing the problem...", "Problem Analysis"),
        (
            "Explaining the problem in depth...",
            "Deep Problem Understanding",
        ),
        ("Creating multiple solutions...", "Solution Approaches"),
        (
            "Sharing problem-solving strategies...",
            "Problem Solver's Mindset",
        ),
    ] {
        expected.push(PresenterEvent::Working(role.0.to_string()));
        expected.push(PresenterEvent::Section {
            heading: role.1.to_string(),
            content: "content".to_string(),
        });
    }
    assert_eq!(presenter.events, expected);
}

#[tokio::test]
async fn test_explainer_failure_keeps_analyzer_section_and_aborts() {
    let backend = FakeBackend::new(vec![
        Ok("analysis text".to_string()),
        Err(GeminiError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        }),
    ]);
    let mut presenter = RecordingPresenter::new();

    let results = invoke_roles(&backend, &two_sum_submission(), &mut presenter).await;

    // Analyzer succeeded, Explainer failed, Architect/Mentor never called.
    assert_eq!(backend.call_count(), 2);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].role, RoleKind::Analyzer);

    assert_eq!(presenter.sections(), vec!["Problem Analysis"]);
    assert_eq!(presenter.errors(), vec![GENERATION_FAILED_MESSAGE]);
}

#[tokio::test]
async fn test_first_call_failure_renders_no_sections() {
    let backend = FakeBackend::always_error(GeminiError::Timeout(120));
    let mut presenter = RecordingPresenter::new();

    let results = invoke_roles(&backend, &two_sum_submission(), &mut presenter).await;

    // Exactly one call, no implicit retry.
    assert_eq!(backend.call_count(), 1);
    assert!(results.is_empty());
    assert!(presenter.sections().is_empty());
    assert_eq!(presenter.errors().len(), 1);
}

#[tokio::test]
async fn test_identical_runs_are_independent_and_equal() {
    let script = || {
        FakeBackend::new(vec![
            Ok("analysis".to_string()),
            Ok("explanation".to_string()),
            Ok("solutions".to_string()),
            Ok("strategies".to_string()),
        ])
    };

    let backend_a = script();
    let mut presenter_a = RecordingPresenter::new();
    let first: Vec<GenerationResult> =
        invoke_roles(&backend_a, &two_sum_submission(), &mut presenter_a).await;

    let backend_b = script();
    let mut presenter_b = RecordingPresenter::new();
    let second: Vec<GenerationResult> =
        invoke_roles(&backend_b, &two_sum_submission(), &mut presenter_b).await;

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
    assert_eq!(backend_a.call_count(), 4);
    assert_eq!(backend_b.call_count(), 4);
    assert_eq!(presenter_a.events, presenter_b.events);
}

#[tokio::test]
async fn test_role_instructions_travel_with_each_call() {
    let backend = FakeBackend::always_ok("ok");
    let mut presenter = RecordingPresenter::new();

    invoke_roles(&backend, &two_sum_submission(), &mut presenter).await;

    let requests = backend.requests();
    assert!(requests[0].instructions[0].contains("LeetCode problem analyzer"));
    assert!(requests[1].instructions[0].contains("explains LeetCode problems in depth"));
    assert!(requests[2].instructions[0].contains("multiple solution approaches"));
    assert!(requests[3].instructions[0].contains("problem-solving mindset"));
}

#[tokio::test]
async fn test_save_transcript_writes_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.md");

    let results: Vec<GenerationResult> = RoleKind::ALL
        .iter()
        .map(|&role| GenerationResult {
            role,
            content: format!("{:?} content", role),
        })
        .collect();

    save_transcript(&path, &two_sum_submission(), &results)
        .await
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("# LeetCode Mentor Transcript"));
    assert!(written.contains("## Problem"));
    assert!(written.contains("Two Sum"));
    assert!(written.contains("## Problem Analysis"));
    assert!(written.contains("## Deep Problem Understanding"));
    assert!(written.contains("## Solution Approaches"));
    assert!(written.contains("## Problem Solver's Mindset"));
}
