use anyhow::Result;

use crate::cli::prompt::Prompter;
use crate::cli::ui::{report, status};
use crate::db::ContactBook;
use crate::models::Contact;

/// Execute the add command. Returns true if the book changed.
pub fn run_add(book: &mut ContactBook, contact: Contact) -> Result<bool> {
    match book.add(contact) {
        Ok(()) => {
            status("Contact added successfully.");
            Ok(true)
        }
        Err(e) => report(e),
    }
}

/// Collect the fields of a new contact. `None` if the user cancelled.
pub fn prompt_contact<P: Prompter>(prompter: &mut P) -> Result<Option<Contact>> {
    let Some(name) = prompter.ask("Name")? else {
        return Ok(None);
    };
    let Some(phone) = prompter.ask("Phone")? else {
        return Ok(None);
    };
    let Some(email) = prompter.ask("Email")? else {
        return Ok(None);
    };
    let Some(address) = prompter.ask("Address (optional)")? else {
        return Ok(None);
    };

    Ok(Some(Contact::new(name.trim(), phone, email).with_address(address)))
}
