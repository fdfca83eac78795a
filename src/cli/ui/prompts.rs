use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::io::{Console, Validator};
use crate::cli::output::{self, MessageKind, OutputPreferences};
use crate::errors::PromptError;

/// Arrow-key menus and inline-validated text prompts on a real terminal.
pub struct TerminalConsole {
    theme: ColorfulTheme,
    prefs: OutputPreferences,
}

impl TerminalConsole {
    pub fn new(prefs: OutputPreferences) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            prefs,
        }
    }
}

impl Console for TerminalConsole {
    fn select(&mut self, prompt: &str, choices: &[&str]) -> Result<String, PromptError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact()?;
        Ok(choices[index].to_string())
    }

    fn input(
        &mut self,
        prompt: &str,
        validator: Option<Validator<'_>>,
    ) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(validator) = validator {
            input = input.validate_with(move |text: &String| validator(text.as_str()));
        }
        Ok(input.interact_text()?)
    }

    fn emit(&mut self, kind: MessageKind, message: &str) -> Result<(), PromptError> {
        output::print(kind, message, &self.prefs);
        Ok(())
    }
}

/// Line-oriented console for piped input: one answer per line.
///
/// Menu answers may be a label (any case) or its 1-based position. A line the
/// validator rejects is reported and the next line is read for the same prompt.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput {
                prompt: prompt.to_string(),
            });
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn select(&mut self, prompt: &str, choices: &[&str]) -> Result<String, PromptError> {
        writeln!(self.writer, "{} {}", prompt, choices.join(" | "))?;
        self.writer.flush()?;
        let answer = self.read_answer(prompt)?;
        let answer = answer.trim();

        if let Some(label) = answer
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| choices.get(index))
        {
            return Ok(label.to_string());
        }
        Ok(choices
            .iter()
            .find(|label| label.eq_ignore_ascii_case(answer))
            .map(|label| label.to_string())
            .unwrap_or_else(|| answer.to_string()))
    }

    fn input(
        &mut self,
        prompt: &str,
        validator: Option<Validator<'_>>,
    ) -> Result<String, PromptError> {
        loop {
            writeln!(self.writer, "{prompt}")?;
            self.writer.flush()?;
            let answer = self.read_answer(prompt)?;
            match validator.map(|check| check(answer.as_str())) {
                Some(Err(reason)) => writeln!(self.writer, "{reason}")?,
                _ => return Ok(answer),
            }
        }
    }

    fn emit(&mut self, _kind: MessageKind, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}
