//! Role factory and prompt assembly.
//!
//! The four role descriptors are static policy: their instruction sequences
//! are the authored behavior of the assistant and every role binds to the
//! same model configuration. Prompt text is assembled in exactly one place
//! ([`build_prompt`]) so no call site concatenates its own variant.

use gemini_client::GenerationRequest;

use crate::mentor::types::{ProblemSubmission, RoleKind};

/// A fixed persona bound to one stage of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RoleDescriptor {
    pub kind: RoleKind,
    pub name: &'static str,
    /// Section heading shown above this role's output.
    pub heading: &'static str,
    /// Label for the in-progress indicator while this role runs.
    pub spinner_label: &'static str,
    /// Task framing prefixed to the shared context; the Analyzer sends the
    /// bare context.
    pub task_framing: Option<&'static str>,
    pub instructions: &'static [&'static str],
}

const PROBLEM_ANALYZER: RoleDescriptor = RoleDescriptor {
    kind: RoleKind::Analyzer,
    name: "Problem Analyzer",
    heading: "Problem Analysis",
    spinner_label: "Analyzing the problem...",
    task_framing: None,
    instructions: &[
        "You are a LeetCode problem analyzer that:",
        "1. Breaks down the problem statement into clear components",
        "2. Identifies the problem type (Array, String, Tree, Graph, DP, etc.)",
        "3. Extracts key constraints and requirements",
        "4. Identifies edge cases to consider",
        "5. Determines the expected time/space complexity",
        "Always respond in clear English for better understanding.",
        "Start with a brief summary, then provide detailed analysis.",
    ],
};

const PROBLEM_EXPLAINER: RoleDescriptor = RoleDescriptor {
    kind: RoleKind::Explainer,
    name: "Problem Explainer",
    heading: "Deep Problem Understanding",
    spinner_label: "Explaining the problem in depth...",
    task_framing: Some("Explain this problem in depth: "),
    instructions: &[
        "You are a coding mentor that explains LeetCode problems in depth:",
        "1. Use simple analogies and real-world examples",
        "2. Break down complex concepts into digestible parts",
        "3. Provide step-by-step walkthrough of examples",
        "4. Explain why certain approaches work better than others",
        "5. Help users understand the intuition behind the solution",
        "Use clear English throughout your explanations.",
        "Focus on building conceptual understanding, not just code.",
    ],
};

const SOLUTION_ARCHITECT: RoleDescriptor = RoleDescriptor {
    kind: RoleKind::Architect,
    name: "Solution Architect",
    heading: "Solution Approaches",
    spinner_label: "Creating multiple solutions...",
    task_framing: Some("Provide multiple solution approaches for: "),
    instructions: &[
        "You are a coding expert that provides multiple solution approaches:",
        "1. Present solutions from brute force to optimal",
        "2. Provide clean, well-commented code in Python/Java/C++",
        "3. Explain time and space complexity for each approach",
        "4. Show the evolution of thinking from naive to optimal",
        "5. Include code snippets with detailed explanations",
        "All explanations and code comments should be in English.",
        "Always provide at least 2-3 different approaches when possible.",
    ],
};

const PROBLEM_SOLVER_MENTOR: RoleDescriptor = RoleDescriptor {
    kind: RoleKind::Mentor,
    name: "Problem Solver Mentor",
    heading: "Problem Solver's Mindset",
    spinner_label: "Sharing problem-solving strategies...",
    task_framing: Some("Provide problem-solving insights and strategies for: "),
    instructions: &[
        "You are a competitive programming mentor that teaches problem-solving mindset:",
        "1. Provide strategic thinking patterns for similar problems",
        "2. Teach when to use specific data structures and algorithms",
        "3. Share debugging techniques and optimization strategies",
        "4. Give advice on how to approach unknown problems",
        "5. Provide tips for interview preparation and competitive programming",
        "6. Share insights on recognizing problem patterns",
        "Use clear English throughout for better understanding.",
        "Focus on developing algorithmic thinking and problem-solving intuition.",
    ],
};

impl RoleDescriptor {
    /// Descriptor for a role. Construction is static and side-effect free.
    pub fn for_kind(kind: RoleKind) -> &'static RoleDescriptor {
        match kind {
            RoleKind::Analyzer => &PROBLEM_ANALYZER,
            RoleKind::Explainer => &PROBLEM_EXPLAINER,
            RoleKind::Architect => &SOLUTION_ARCHITECT,
            RoleKind::Mentor => &PROBLEM_SOLVER_MENTOR,
        }
    }

    /// All four descriptors in invocation order.
    pub fn all() -> [&'static RoleDescriptor; 4] {
        [
            &PROBLEM_ANALYZER,
            &PROBLEM_EXPLAINER,
            &SOLUTION_ARCHITECT,
            &PROBLEM_SOLVER_MENTOR,
        ]
    }
}

/// The shared, role-independent context: built once per submission and reused
/// by all four roles.
pub fn build_context(submission: &ProblemSubmission) -> String {
    format!(
        "Problem: {}\nDifficulty: {}\nPreferred Language: {}",
        submission.statement, submission.difficulty, submission.language
    )
}

/// Final prompt text for one role: its task framing (if any) followed by the
/// shared context. Never depends on another role's output.
pub fn build_prompt(role: &RoleDescriptor, context: &str) -> String {
    match role.task_framing {
        Some(framing) => format!("{}{}", framing, context),
        None => context.to_string(),
    }
}

/// Assemble the full generation request for one role.
pub fn build_request(role: &RoleDescriptor, context: &str) -> GenerationRequest {
    GenerationRequest::new(
        build_prompt(role, context),
        role.instructions.iter().map(|s| s.to_string()).collect(),
    )
}
