use anyhow::Result;

use crate::cli::display::print_contacts;
use crate::cli::ui::status;
use crate::db::ContactBook;

/// Execute the search command. Returns the number of matches.
pub fn run_search(book: &ContactBook, keyword: &str) -> Result<usize> {
    let results = book.search(keyword);
    if results.is_empty() {
        status("No contact found with that keyword.");
    } else {
        print_contacts(&results);
    }
    Ok(results.len())
}
