use std::io::{BufRead, Write};

use crate::core::errors::{Result, UuEnvError};
use crate::core::traits::prompter::Prompter;

/// Numbered-menu prompter reading one line per question.
///
/// ```text
///   What do you want to do?
///   1. Show current environment
///   2. Change environment
///
///   Selection [1]:
/// ```
///
/// A blank line picks the first choice. A number in range or an exact
/// label picks that choice. Anything else, EOF included, is no match.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn render(&mut self, message: &str, choices: &[String]) -> std::io::Result<()> {
        writeln!(self.output, "\n  {message}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}. {choice}", i + 1)?;
        }
        writeln!(self.output)?;
        write!(self.output, "  Selection [1]: ")?;
        self.output.flush()
    }

    fn pick(answer: &str, choices: &[String]) -> Option<String> {
        if answer.is_empty() {
            return choices.first().cloned();
        }
        if let Ok(n) = answer.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| choices.get(i)).cloned();
        }
        choices.iter().find(|c| c.as_str() == answer).cloned()
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<Option<String>> {
        self.render(message, choices)
            .map_err(|source| UuEnvError::Prompt { source })?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| UuEnvError::Prompt { source })?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Self::pick(line.trim(), choices))
    }
}
