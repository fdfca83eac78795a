//! Scripted console for driving sessions deterministically in tests.

use std::collections::VecDeque;

use crate::cli::io::{Console, Validator};
use crate::cli::output::MessageKind;
use crate::errors::PromptError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Prompt(String),
    Answer(String),
    Rejected { input: String, reason: String },
    Message(MessageKind, String),
}

/// Answers prompts from a queue and records everything that happened.
///
/// Menu answers are returned verbatim, so an answer that is not one of the
/// offered labels reaches the shell as an unknown action. Running out of
/// answers surfaces as [`PromptError::EndOfInput`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<TranscriptEntry>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Every emitted message, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Message(_, text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn messages_of(&self, kind: MessageKind) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Message(entry_kind, text) if *entry_kind == kind => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn rejections(&self) -> Vec<(&str, &str)> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Rejected { input, reason } => {
                    Some((input.as_str(), reason.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.transcript.push(TranscriptEntry::Prompt(prompt.to_string()));
        let answer = self.answers.pop_front().ok_or_else(|| PromptError::EndOfInput {
            prompt: prompt.to_string(),
        })?;
        self.transcript.push(TranscriptEntry::Answer(answer.clone()));
        Ok(answer)
    }
}

impl Console for ScriptedConsole {
    fn select(&mut self, prompt: &str, _choices: &[&str]) -> Result<String, PromptError> {
        self.next_answer(prompt)
    }

    fn input(
        &mut self,
        prompt: &str,
        validator: Option<Validator<'_>>,
    ) -> Result<String, PromptError> {
        loop {
            let answer = self.next_answer(prompt)?;
            match validator.map(|check| check(answer.as_str())) {
                Some(Err(reason)) => self.transcript.push(TranscriptEntry::Rejected {
                    input: answer,
                    reason,
                }),
                _ => return Ok(answer),
            }
        }
    }

    fn emit(&mut self, kind: MessageKind, message: &str) -> Result<(), PromptError> {
        self.transcript
            .push(TranscriptEntry::Message(kind, message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_consumed_in_order() {
        let mut console = ScriptedConsole::new(["Deposit", "Alice"]);
        assert_eq!(console.select("Choose:", &["Deposit"]).unwrap(), "Deposit");
        assert_eq!(console.input("Name:", None).unwrap(), "Alice");
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn rejected_answers_are_recorded_and_skipped() {
        let mut console = ScriptedConsole::new(["", "x", "7"]);
        let digits = |text: &str| {
            if !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit()) {
                Ok(())
            } else {
                Err("digits only".to_string())
            }
        };
        assert_eq!(console.input("Amount:", Some(&digits)).unwrap(), "7");
        assert_eq!(
            console.rejections(),
            [("", "digits only"), ("x", "digits only")]
        );
    }

    #[test]
    fn exhausted_script_reports_prompt() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = console.select("Choose:", &[]).unwrap_err();
        assert!(matches!(err, PromptError::EndOfInput { ref prompt } if prompt == "Choose:"));
    }

    #[test]
    fn messages_are_filtered_by_kind() {
        let mut console = ScriptedConsole::default();
        console.success("saved").unwrap();
        console.warning("careful").unwrap();
        assert_eq!(console.messages(), ["saved", "careful"]);
        assert_eq!(console.messages_of(MessageKind::Warning), ["careful"]);
    }
}
