//! Presentation surface for pipeline output.
//!
//! The pipeline renders through the [`Presenter`] trait so the console
//! implementation can be swapped for [`RecordingPresenter`] in tests. Sections
//! are rendered incrementally: each role's output appears as soon as its call
//! returns, while later roles are still pending.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Display surface consumed by the pipeline.
pub trait Presenter {
    /// Render a completed role's output under a labeled heading.
    fn section(&mut self, heading: &str, content: &str);

    /// Show a transient indicator for the currently-executing role.
    fn start_working(&mut self, label: &str);

    /// Remove the indicator once the role's result is ready.
    fn finish_working(&mut self);

    /// Non-fatal notice (e.g. empty statement).
    fn warning(&mut self, message: &str);

    /// Fatal notice for this submission.
    fn error(&mut self, message: &str);
}

/// Terminal presenter: headings with rule lines, an indicatif spinner for the
/// active role. The spinner is suppressed when stdout is not a TTY so piped
/// output stays clean.
pub struct ConsolePresenter {
    spinner: Option<ProgressBar>,
    interactive: bool,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self {
            spinner: None,
            interactive: std::io::stdout().is_terminal(),
        }
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for ConsolePresenter {
    fn section(&mut self, heading: &str, content: &str) {
        println!("\n{}", "=".repeat(80));
        println!("{}", heading);
        println!("{}", "=".repeat(80));
        println!("{}", content);
    }

    fn start_working(&mut self, label: &str) {
        self.finish_working();

        if !self.interactive {
            println!("{}", label);
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(label.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn finish_working(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn warning(&mut self, message: &str) {
        println!("⚠ {}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

/// What a presenter was asked to display, for assertions in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    Section { heading: String, content: String },
    Working(String),
    Warning(String),
    Error(String),
}

/// Test presenter that records every render call in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Section { heading, .. } => Some(heading.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Warning(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn section(&mut self, heading: &str, content: &str) {
        self.events.push(PresenterEvent::Section {
            heading: heading.to_string(),
            content: content.to_string(),
        });
    }

    fn start_working(&mut self, label: &str) {
        self.events.push(PresenterEvent::Working(label.to_string()));
    }

    fn finish_working(&mut self) {}

    fn warning(&mut self, message: &str) {
        self.events.push(PresenterEvent::Warning(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.events.push(PresenterEvent::Error(message.to_string()));
    }
}
