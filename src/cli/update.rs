use anyhow::Result;

use crate::cli::prompt::Prompter;
use crate::cli::ui::{report, status};
use crate::db::ContactBook;
use crate::models::ContactUpdate;

/// Execute the update command. Returns true if the contact was found.
pub fn run_update(book: &mut ContactBook, name: &str, update: &ContactUpdate) -> Result<bool> {
    match book.update(name.trim(), update) {
        Ok(_) => {
            status("Contact updated.");
            Ok(true)
        }
        Err(e) => report(e),
    }
}

/// Look the contact up, then ask for replacement values.
/// Blank answers keep the current value.
pub fn prompt_update<P: Prompter>(book: &mut ContactBook, prompter: &mut P, name: &str) -> Result<bool> {
    if book.get(name.trim()).is_none() {
        status("Contact not found.");
        return Ok(false);
    }

    status("Leave input blank to keep current value.");
    let Some(phone) = prompter.ask("New phone")? else {
        status("Cancelled.");
        return Ok(false);
    };
    let Some(email) = prompter.ask("New email")? else {
        status("Cancelled.");
        return Ok(false);
    };
    let Some(address) = prompter.ask("New address")? else {
        status("Cancelled.");
        return Ok(false);
    };

    let update = ContactUpdate::new(Some(phone), Some(email), Some(address));
    run_update(book, name, &update)
}
