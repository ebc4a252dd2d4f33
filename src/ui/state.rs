//! UI state for the roadmap explorer

use crate::curriculum::model::InteractiveTool;
use crate::llm::commit::EMPTY_DESCRIPTION_MSG;
use crate::resolver::{self, Resolution};
use crate::selection::SelectionController;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Steps,
    Skills,
    CommitInput,
}

/// Top-level application state
#[derive(Debug)]
pub struct App {
    pub controller: SelectionController,
    pub focus: Focus,
    /// Change description typed into the commit tool.
    pub commit_input: String,
    /// Last generated commit message, if any.
    pub commit_output: Option<String>,
    /// Last generation error, if any.
    pub commit_error: Option<String>,
    /// A generation request is in flight; the tool is disabled.
    pub busy: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: SelectionController) -> Self {
        Self {
            controller,
            focus: Focus::Steps,
            commit_input: String::new(),
            commit_output: None,
            commit_error: None,
            busy: false,
            should_quit: false,
        }
    }

    /// Resolve the current selection to its render outcome.
    pub fn resolution(&self) -> Resolution {
        let (step_id, skill) = self.controller.current();
        resolver::resolve(self.controller.registry(), step_id, skill)
    }

    /// The interactive tool on the current page, if the selection
    /// resolves to a dedicated unit that carries one.
    pub fn interactive_tool(&self) -> Option<&'static InteractiveTool> {
        match self.resolution() {
            Resolution::Dedicated(unit) => unit.interactive_tool(),
            _ => None,
        }
    }

    /// Changing step or skill dismisses any stale tool output.
    pub fn clear_commit_results(&mut self) {
        self.commit_output = None;
        self.commit_error = None;
        if self.focus == Focus::CommitInput {
            self.focus = Focus::Skills;
        }
    }

    /// Begin a generation request. Returns the description to submit,
    /// or `None` when the request must not be sent (already in flight,
    /// or nothing typed; the empty case surfaces the usual message
    /// without a network call).
    pub fn begin_generation(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        let description = self.commit_input.trim().to_string();
        if description.is_empty() {
            self.commit_error = Some(EMPTY_DESCRIPTION_MSG.to_string());
            self.commit_output = None;
            return None;
        }
        self.busy = true;
        self.commit_error = None;
        self.commit_output = None;
        Some(description)
    }

    /// Record the outcome of a generation request and re-enable the tool.
    pub fn finish_generation(&mut self, outcome: Result<String, String>) {
        self.busy = false;
        match outcome {
            Ok(message) => self.commit_output = Some(message),
            Err(reason) => self.commit_error = Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::CurriculumRegistry;

    fn app() -> App {
        App::new(SelectionController::new(CurriculumRegistry::builtin()).unwrap())
    }

    #[test]
    fn test_tool_only_visible_on_git_unit() {
        let mut a = app();
        assert!(a.interactive_tool().is_none());

        a.controller.select_skill("Git & version control").unwrap();
        let tool = a.interactive_tool().expect("git unit carries the tool");
        assert_eq!(tool.title, "AI Commit Message Generator");
    }

    #[test]
    fn test_empty_input_sets_error_without_starting_request() {
        let mut a = app();
        a.commit_input = "   ".into();
        assert!(a.begin_generation().is_none());
        assert!(!a.busy);
        assert_eq!(a.commit_error.as_deref(), Some(EMPTY_DESCRIPTION_MSG));
    }

    #[test]
    fn test_only_one_request_in_flight() {
        let mut a = app();
        a.commit_input = "added retry logic".into();
        assert!(a.begin_generation().is_some());
        assert!(a.busy);
        // A second submit while busy is ignored.
        assert!(a.begin_generation().is_none());

        a.finish_generation(Ok("feat: add retry logic".into()));
        assert!(!a.busy);
        assert_eq!(a.commit_output.as_deref(), Some("feat: add retry logic"));
    }

    #[test]
    fn test_failure_returns_tool_to_idle() {
        let mut a = app();
        a.commit_input = "broke everything".into();
        a.begin_generation();
        a.finish_generation(Err("Failed to generate commit message: boom".into()));
        assert!(!a.busy);
        assert!(a.commit_error.as_deref().unwrap_or("").contains("boom"));
        // Idle again, a retry is allowed.
        assert!(a.begin_generation().is_some());
    }
}
