//! Pipeline orchestration: input gate, sequential invoker, submission boundary.
//!
//! Control flow is strictly linear and blocking: role N+1's prompt is not
//! built until role N's call has returned. The sequencing exists for
//! presentation pacing and quota control only; every role's prompt is built
//! from the same shared context, never from an earlier role's output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gemini_client::{GeminiClient, GeminiConfig, GeminiError, GenerationBackend};

use crate::mentor::presenter::Presenter;
use crate::mentor::roles::{build_context, build_request, RoleDescriptor};
use crate::mentor::types::{GenerationResult, ProblemSubmission, RoleKind};

/// User-visible messages. Failure detail never reaches these; it goes to the
/// tracing log instead.
pub const MISSING_KEY_MESSAGE: &str =
    "API Key missing! Set GEMINI_API_KEY in your environment or a .env file.";
pub const EMPTY_STATEMENT_MESSAGE: &str = "Please provide a LeetCode problem statement.";
pub const INIT_FAILED_MESSAGE: &str = "Agents failed to initialize. Please check your API key.";
pub const GENERATION_FAILED_MESSAGE: &str =
    "An error occurred during analysis. Please try again.";

/// Failure taxonomy for one submission.
#[derive(Debug, thiserror::Error)]
pub enum MentorError {
    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,

    #[error("problem statement is empty")]
    EmptyStatement,

    #[error("failed to initialize generation client: {0}")]
    Initialization(#[source] GeminiError),

    #[error("{role} call failed: {source}")]
    Generation {
        role: &'static str,
        #[source]
        source: GeminiError,
    },
}

impl MentorError {
    /// Generic text shown to the user; failure detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            MentorError::MissingCredential => MISSING_KEY_MESSAGE,
            MentorError::EmptyStatement => EMPTY_STATEMENT_MESSAGE,
            MentorError::Initialization(_) => INIT_FAILED_MESSAGE,
            MentorError::Generation { .. } => GENERATION_FAILED_MESSAGE,
        }
    }
}

/// Everything the pipeline needs for one submission, passed in explicitly.
/// Nothing here reads ambient global state.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    /// Optional transcript path; when set, completed sections are also saved
    /// as a markdown document.
    pub output: Option<PathBuf>,
}

/// Outcome of the input gate: checked before any role runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    MissingCredential,
    EmptyStatement,
    Proceed,
}

/// Validate the credential and the statement. Pure; no side effects. The
/// credential is checked first, so a missing key is reported regardless of
/// statement content.
pub fn check_submission(api_key: Option<&str>, submission: &ProblemSubmission) -> GateOutcome {
    match api_key {
        None => GateOutcome::MissingCredential,
        Some(key) if key.trim().is_empty() => GateOutcome::MissingCredential,
        Some(_) if submission.statement.trim().is_empty() => GateOutcome::EmptyStatement,
        Some(_) => GateOutcome::Proceed,
    }
}

/// Run one submission end to end.
///
/// All pipeline failures are converted to presenter banners here; none
/// propagate out. The returned results are whatever roles completed: on a
/// mid-pipeline failure, earlier sections stay rendered and their results are
/// still returned.
pub async fn run_submission(
    config: &SessionConfig,
    submission: &ProblemSubmission,
    presenter: &mut dyn Presenter,
) -> Result<Vec<GenerationResult>> {
    match check_submission(config.api_key.as_deref(), submission) {
        GateOutcome::MissingCredential => {
            presenter.error(MentorError::MissingCredential.user_message());
            return Ok(Vec::new());
        }
        GateOutcome::EmptyStatement => {
            presenter.warning(MentorError::EmptyStatement.user_message());
            return Ok(Vec::new());
        }
        GateOutcome::Proceed => {}
    }

    let gemini_config = GeminiConfig::new(config.api_key.clone().unwrap_or_default())
        .with_model(config.model.clone())
        .with_timeout_secs(config.timeout_secs);

    let client = match GeminiClient::new(gemini_config) {
        Ok(client) => client,
        Err(source) => {
            let error = MentorError::Initialization(source);
            tracing::error!(error = %error, "initialization failed");
            presenter.error(error.user_message());
            return Ok(Vec::new());
        }
    };

    let results = invoke_roles(&client, submission, presenter).await;

    if let Some(path) = &config.output {
        if !results.is_empty() {
            save_transcript(path, submission, &results).await?;
            println!("\nTranscript saved to: {}", path.display());
        }
    }

    Ok(results)
}

/// Invoke the four roles in fixed order against one backend.
///
/// Each role's prompt is built from the shared context immediately before its
/// call; the call is awaited before the next role starts. On the first
/// failure the remaining roles are skipped, one generic banner is shown, and
/// the underlying error is logged with full detail. Sections already rendered
/// are never retracted.
pub async fn invoke_roles(
    backend: &dyn GenerationBackend,
    submission: &ProblemSubmission,
    presenter: &mut dyn Presenter,
) -> Vec<GenerationResult> {
    let context = build_context(submission);
    let mut results = Vec::with_capacity(RoleKind::ALL.len());

    for role in RoleDescriptor::all() {
        presenter.start_working(role.spinner_label);
        let request = build_request(role, &context);

        match backend.generate(&request).await {
            Ok(content) => {
                presenter.finish_working();
                presenter.section(role.heading, &content);
                results.push(GenerationResult {
                    role: role.kind,
                    content,
                });
            }
            Err(source) => {
                presenter.finish_working();
                let error = MentorError::Generation {
                    role: role.name,
                    source,
                };
                tracing::error!(error = %error, "generation failed, aborting remaining roles");
                presenter.error(error.user_message());
                break;
            }
        }
    }

    results
}

/// Write completed sections as a markdown transcript.
pub async fn save_transcript(
    path: &Path,
    submission: &ProblemSubmission,
    results: &[GenerationResult],
) -> Result<()> {
    let mut doc = String::new();
    doc.push_str("# LeetCode Mentor Transcript\n\n");
    doc.push_str(&format!(
        "Generated: {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    doc.push_str(&format!(
        "Difficulty: {} | Preferred Language: {}\n\n",
        submission.difficulty, submission.language
    ));
    doc.push_str("## Problem\n\n");
    doc.push_str(submission.statement.trim());
    doc.push_str("\n\n");

    for result in results {
        let heading = RoleDescriptor::for_kind(result.role).heading;
        doc.push_str(&format!("## {}\n\n{}\n\n", heading, result.content.trim()));
    }

    tokio::fs::write(path, doc)
        .await
        .with_context(|| format!("Failed to write transcript: {}", path.display()))
}
