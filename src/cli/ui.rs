//! Shared UI primitives
//!
//! Conventions:
//! - Feedback: one short sentence: `Contact deleted.`
//! - Problems go to stderr with an `Error:` or `Warning:` prefix

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::ui::RenderConfig;
use std::io::{self, Write};

use crate::db::LoadStatus;
use crate::error::BookError;

/// Print a status message to stdout
#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Print an error message to stderr
#[inline]
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

/// Print a warning message to stderr
#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

/// Report a book error to the user.
///
/// Recoverable outcomes are printed and yield `Ok(false)` ("nothing
/// changed"); anything else is passed up.
pub fn report(err: BookError) -> Result<bool> {
    match err {
        BookError::NotFound(_) => {
            status("Contact not found.");
            Ok(false)
        }
        e if e.is_recoverable() => {
            status(&e.to_string());
            Ok(false)
        }
        e => Err(e.into()),
    }
}

/// Message for a backing file that was unreadable at open time
pub fn load_warning(status: &LoadStatus) -> Option<String> {
    match status {
        LoadStatus::Reset(reason) => Some(format!(
            "Could not load contacts (file may be corrupted): {}. Saving will overwrite it.",
            reason
        )),
        LoadStatus::Missing | LoadStatus::Loaded(_) => None,
    }
}

/// Print the load warning, if any
pub fn warn_if_reset(status: &LoadStatus) {
    if let Some(msg) = load_warning(status) {
        warning(&msg);
    }
}

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_render_config() {
        let config = minimal_render_config();
        let _ = config;
    }

    #[test]
    fn test_report_recoverable() {
        assert!(!report(BookError::DuplicateName("Alice".into())).unwrap());
        assert!(!report(BookError::NotFound("Bob".into())).unwrap());
        assert!(!report(BookError::EmptyName).unwrap());
    }

    #[test]
    fn test_report_io_propagates() {
        let err = BookError::io("contacts.json", io::Error::other("read-only"));
        assert!(report(err).is_err());
    }

    #[test]
    fn test_load_warning_only_on_reset() {
        assert!(load_warning(&LoadStatus::Missing).is_none());
        assert!(load_warning(&LoadStatus::Loaded(3)).is_none());
        let msg = load_warning(&LoadStatus::Reset("expected value at line 1".into())).unwrap();
        assert!(msg.starts_with("Could not load contacts"));
        assert!(msg.contains("expected value at line 1"));
    }
}
