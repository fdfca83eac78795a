//! The input/output collaborator the shell loop talks to.

use crate::cli::output::MessageKind;
use crate::errors::PromptError;

/// Predicate applied to free-text answers. `Err` carries the message shown
/// to the user before the prompt is repeated.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Prompting and reporting surface used by the shell loop.
///
/// Implementations own the retry behaviour: `input` must not return text that
/// the validator rejected.
pub trait Console {
    /// Presents `choices` and returns the label the user picked. Line-based
    /// consoles may return free text that matches none of them.
    fn select(&mut self, prompt: &str, choices: &[&str]) -> Result<String, PromptError>;

    fn input(&mut self, prompt: &str, validator: Option<Validator<'_>>)
        -> Result<String, PromptError>;

    fn emit(&mut self, kind: MessageKind, message: &str) -> Result<(), PromptError>;

    fn info(&mut self, message: &str) -> Result<(), PromptError> {
        self.emit(MessageKind::Info, message)
    }

    fn success(&mut self, message: &str) -> Result<(), PromptError> {
        self.emit(MessageKind::Success, message)
    }

    fn warning(&mut self, message: &str) -> Result<(), PromptError> {
        self.emit(MessageKind::Warning, message)
    }
}
