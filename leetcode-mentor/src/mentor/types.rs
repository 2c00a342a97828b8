//! Data structures for the mentoring pipeline

use std::fmt;

use clap::ValueEnum;

/// Problem difficulty as reported by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Language the user wants solution code in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Python,
    Java,
    Cpp,
    Javascript,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Javascript => "JavaScript",
        };
        write!(f, "{}", label)
    }
}

/// One user submission. Rebuilt fresh for every run; never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct ProblemSubmission {
    pub statement: String,
    pub difficulty: Difficulty,
    pub language: Language,
}

impl ProblemSubmission {
    pub fn new(statement: impl Into<String>, difficulty: Difficulty, language: Language) -> Self {
        Self {
            statement: statement.into(),
            difficulty,
            language,
        }
    }
}

/// The four mentoring roles, in invocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Analyzer,
    Explainer,
    Architect,
    Mentor,
}

impl RoleKind {
    /// Fixed invocation and presentation order.
    pub const ALL: [RoleKind; 4] = [
        RoleKind::Analyzer,
        RoleKind::Explainer,
        RoleKind::Architect,
        RoleKind::Mentor,
    ];
}

/// Text produced by one role for one submission. Ephemeral; never persisted
/// unless the user asked for a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub role: RoleKind,
    pub content: String,
}
