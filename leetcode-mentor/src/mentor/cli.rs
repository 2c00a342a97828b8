//! CLI argument parsing for the mentoring pipeline

use std::path::Path;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;

use crate::mentor::pipeline::SessionConfig;
use crate::mentor::types::{Difficulty, Language};

const LONG_ABOUT: &str = "\
LeetCode Mentor: paste a problem, get a complete walkthrough from four \
mentoring roles.

How to use:
  1. Pass the problem with --problem (inline text or a file path), or pipe it
     on stdin
  2. Pick --difficulty and --language so the advice is tailored
  3. Study each section as it streams in

What you'll get:
  - Problem Analysis
  - Deep Problem Understanding
  - Solution Approaches
  - Problem Solver's Mindset";

/// LeetCode Mentor CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "leetcode-mentor", about = "AI mentoring for LeetCode problems", long_about = LONG_ABOUT)]
pub struct Args {
    /// Problem statement: inline text or a path to a file containing it.
    /// Reads stdin when omitted.
    #[arg(short, long)]
    pub problem: Option<String>,

    /// Difficulty level of the problem
    #[arg(short, long, value_enum, default_value = "unknown")]
    pub difficulty: Difficulty,

    /// Preferred language for solution code
    #[arg(short, long, value_enum, default_value = "python")]
    pub language: Language,

    /// Gemini model id
    #[arg(long, default_value = "gemini-2.0-flash-exp")]
    pub model: String,

    /// Per-call request timeout in seconds
    #[arg(long, default_value = "120")]
    pub timeout: u64,

    /// Save the session transcript as a markdown file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print study tips after the session
    #[arg(long)]
    pub tips: bool,
}

impl Args {
    /// Resolve the problem statement: file content if `--problem` names an
    /// existing file, the literal text otherwise, stdin when omitted.
    pub async fn resolve_statement(&self) -> Result<String> {
        match &self.problem {
            Some(value) => {
                let path = Path::new(value);
                if path.exists() && path.is_file() {
                    tokio::fs::read_to_string(path)
                        .await
                        .with_context(|| format!("Failed to read problem file: {}", value))
                } else {
                    Ok(value.clone())
                }
            }
            None => {
                let mut statement = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut statement)
                    .await
                    .context("Failed to read problem statement from stdin")?;
                Ok(statement)
            }
        }
    }

    /// Build the session config, taking the credential as an explicit value
    /// rather than reading ambient state here.
    pub fn session_config(&self, api_key: Option<String>) -> SessionConfig {
        SessionConfig {
            api_key,
            model: self.model.clone(),
            timeout_secs: self.timeout,
            output: self.output.clone(),
        }
    }
}
