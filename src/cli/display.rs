use crate::models::Contact;

/// One line per contact, in the order given
pub fn format_contacts(contacts: &[&Contact]) -> String {
    contacts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_contacts(contacts: &[&Contact]) {
    println!("{}", format_contacts(contacts));
}
