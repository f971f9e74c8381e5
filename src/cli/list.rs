use anyhow::Result;

use crate::cli::display::print_contacts;
use crate::cli::ui::status;
use crate::db::ContactBook;

/// Print every contact, sorted by name
pub fn run_list(book: &ContactBook) -> Result<()> {
    match book.list() {
        Some(contacts) => print_contacts(&contacts),
        None => status("No contacts to show."),
    }
    Ok(())
}
