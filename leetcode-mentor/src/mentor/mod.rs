//! Mentoring pipeline module
//!
//! Runs one problem submission through four fixed Gemini roles, in order:
//! Analyzer, Explainer, Architect, Mentor. Each role gets its own instruction
//! set and a prompt built from the shared problem context; results are
//! rendered incrementally as each call returns.

pub mod cli;
pub mod pipeline;
pub mod presenter;
pub mod roles;
pub mod tips;
pub mod types;

// Re-export commonly used types
pub use pipeline::{check_submission, run_submission, GateOutcome, MentorError, SessionConfig};
pub use presenter::{ConsolePresenter, Presenter, PresenterEvent, RecordingPresenter};
pub use roles::{build_context, build_prompt, RoleDescriptor};
pub use types::{Difficulty, GenerationResult, Language, ProblemSubmission, RoleKind};
