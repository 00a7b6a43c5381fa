//! Interactive console prompts
//!
//! Each prompt loops until it gets acceptable input. The input source is a
//! generic `BufRead`, so tests drive the loops with scripted lines.

use std::io::{BufRead, Write};

use crate::context::Context;
use crate::discovery::TemplateRef;
use crate::error::AppError;
use crate::workspace::CaseRef;

const SOURCE: &str = "prompt";

/// Parse a 1-based menu choice into an index below `count`
pub(crate) fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let choice: usize = trimmed.parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        // Non-UTF-8 bytes decode to U+FFFD and fail validation like any other bad line
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Err(AppError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line)
            .trim_end_matches(['\r', '\n'])
            .to_string())
    }

    /// List the templates and return the index of the one picked
    pub(crate) fn select_template(&mut self, templates: &[TemplateRef]) -> Result<usize, AppError> {
        writeln!(self.output, "SELECT> Available Jupyter notebooks:")?;
        for (i, template) in templates.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, template)?;
        }

        loop {
            let raw = self.ask("SELECT> Select a notebook by number: ")?;
            if let Some(index) = parse_selection(&raw, templates.len()) {
                return Ok(index);
            }
            writeln!(
                self.output,
                "SELECT> Invalid input. Please enter a number corresponding to the notebook."
            )?;
        }
    }

    /// Ask for an optional case reference
    pub(crate) fn read_case_ref(&mut self, ctx: &Context) -> Result<Option<CaseRef>, AppError> {
        writeln!(self.output, "ID ref> Enter a case or incident ID reference.")?;
        writeln!(
            self.output,
            "ID ref> Press Enter to leave the reference empty for now."
        )?;

        loop {
            let raw = self.ask("ID ref> Enter case ID: ")?;
            match CaseRef::parse(&raw) {
                Ok(case_ref) => return Ok(case_ref),
                Err(e) => {
                    ctx.log.debug(SOURCE, &e);
                    ctx.log.warning(
                        SOURCE,
                        "Invalid input. Please enter a valid case ID reference or leave it empty.",
                    );
                    ctx.log.info(
                        SOURCE,
                        "ID ref explanation> The case ID can be 20 characters long and contain letters [a-z], numbers [0-9].",
                    );
                    ctx.log.info(
                        SOURCE,
                        "ID ref explanation> It can also contain space and some special characters: . - _ # ( )",
                    );
                }
            }
        }
    }
}
