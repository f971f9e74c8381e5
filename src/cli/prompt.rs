//! Line input for the interactive menu
//!
//! The menu only needs "ask for one line of text". On a terminal that is an
//! inquire prompt; when stdin is piped it is a plain line reader, which is
//! also what the tests script. Answers come back as typed; callers trim
//! where a name is used as a key.

use anyhow::Result;
use inquire::{InquireError, Text};
use std::io::{self, BufRead, Write};

use super::ui::minimal_render_config;

pub trait Prompter {
    /// Ask for one line of input, without its line ending.
    /// `None` means the user cancelled or input ended.
    fn ask(&mut self, label: &str) -> Result<Option<String>>;
}

/// Terminal prompter backed by inquire
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        let prompt = format!("{}: ", label);
        let result = Text::new(&prompt)
            .with_render_config(minimal_render_config())
            .prompt();

        match result {
            Ok(input) => Ok(Some(input)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads one line per prompt from any buffered reader
pub struct LinePrompter<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, echo: true }
    }

    /// Don't print prompt labels
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        if self.echo {
            print!("{}: ", label);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
