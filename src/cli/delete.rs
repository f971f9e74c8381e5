use anyhow::Result;

use crate::cli::ui::{report, status};
use crate::db::ContactBook;

/// Execute the delete command. Returns true if a contact was removed.
pub fn run_delete(book: &mut ContactBook, name: &str) -> Result<bool> {
    match book.delete(name.trim()) {
        Ok(_) => {
            status("Contact deleted.");
            Ok(true)
        }
        Err(e) => report(e),
    }
}
