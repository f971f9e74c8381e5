use tracing::debug;

use super::ContactBook;
use crate::error::{BookError, Result};
use crate::models::{Contact, ContactUpdate};

impl ContactBook {
    /// Append a contact unless one with the same name (ignoring case) exists.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if contact.name.trim().is_empty() {
            return Err(BookError::EmptyName);
        }
        if self.contacts.iter().any(|c| c.matches_name(&contact.name)) {
            debug!(name = %contact.name, "rejected duplicate");
            return Err(BookError::DuplicateName(contact.name));
        }
        debug!(name = %contact.name, "added contact");
        self.contacts.push(contact);
        Ok(())
    }

    /// Contacts sorted by name, ignoring case. `None` when the book is empty.
    pub fn list(&self) -> Option<Vec<&Contact>> {
        if self.contacts.is_empty() {
            return None;
        }
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by_cached_key(|c| c.sort_key());
        Some(sorted)
    }

    /// Contacts whose name contains `keyword` (ignoring case) or whose phone
    /// contains it verbatim, in stored order.
    pub fn search(&self, keyword: &str) -> Vec<&Contact> {
        let needle = keyword.to_lowercase();
        let results: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.phone.contains(keyword))
            .collect();
        debug!(keyword, matches = results.len(), "search");
        results
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.matches_name(name))
    }

    /// Remove the contact with this name, returning it.
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let idx = self
            .contacts
            .iter()
            .position(|c| c.matches_name(name))
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        let removed = self.contacts.remove(idx);
        debug!(name = %removed.name, "deleted contact");
        Ok(removed)
    }

    /// Replace the supplied fields of the named contact. The name itself
    /// never changes.
    pub fn update(&mut self, name: &str, update: &ContactUpdate) -> Result<&Contact> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.matches_name(name))
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        let changed = update.apply(contact);
        debug!(name = %contact.name, ?changed, "updated contact");
        Ok(&*contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // Never saved, so the path is never touched
    fn empty_book() -> ContactBook {
        ContactBook {
            contacts: Vec::new(),
            path: PathBuf::from("unused.json"),
            load_status: super::super::LoadStatus::Missing,
        }
    }

    fn alice_and_bob() -> ContactBook {
        let mut book = empty_book();
        book.add(Contact::new("Alice", "555-1111", "alice@example.com")).unwrap();
        book.add(Contact::new("Bob", "555-2222", "bob@example.com")).unwrap();
        book
    }

    #[test]
    fn test_add_duplicate_ignores_case() {
        let mut book = alice_and_bob();
        let result = book.add(Contact::new("ALICE", "999", "other@example.com"));
        assert!(matches!(result, Err(BookError::DuplicateName(ref n)) if n == "ALICE"));
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("alice").unwrap().phone, "555-1111");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut book = empty_book();
        assert!(matches!(book.add(Contact::new("", "1", "e")), Err(BookError::EmptyName)));
        assert!(matches!(book.add(Contact::new("   ", "1", "e")), Err(BookError::EmptyName)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_list_sorted_ignoring_case() {
        let mut book = empty_book();
        for name in ["charlie", "Bob", "alice", "Dave"] {
            book.add(Contact::new(name, "1", "e")).unwrap();
        }
        let names: Vec<&str> = book.list().unwrap().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["alice", "Bob", "charlie", "Dave"]);

        // Stored order untouched
        let stored: Vec<&str> = book.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(stored, ["charlie", "Bob", "alice", "Dave"]);
    }

    #[test]
    fn test_list_empty_is_none() {
        assert!(empty_book().list().is_none());
    }

    #[test]
    fn test_search_by_name() {
        let book = alice_and_bob();
        let results = book.search("ali");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Alice");
    }

    #[test]
    fn test_search_by_phone() {
        let book = alice_and_bob();
        let results = book.search("555-2");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Bob");
    }

    #[test]
    fn test_search_name_ignores_case() {
        let book = alice_and_bob();
        assert_eq!(book.search("BOB").len(), 1);
    }

    #[test]
    fn test_search_phone_is_exact_substring() {
        let mut book = empty_book();
        book.add(Contact::new("Carol", "ext-ABC", "c@x.io")).unwrap();
        assert_eq!(book.search("ext-ABC").len(), 1);
        // Name doesn't contain it and phone match is case-sensitive
        assert!(book.search("EXT-abc").is_empty());
    }

    #[test]
    fn test_search_keeps_stored_order() {
        let mut book = empty_book();
        book.add(Contact::new("Zoe", "555-0001", "z@x.io")).unwrap();
        book.add(Contact::new("Adam", "555-0002", "a@x.io")).unwrap();
        let names: Vec<&str> = book.search("555").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zoe", "Adam"]);
    }

    #[test]
    fn test_search_no_match() {
        assert!(alice_and_bob().search("xyz").is_empty());
    }

    #[test]
    fn test_delete_ignores_case() {
        let mut book = alice_and_bob();
        let removed = book.delete("bOB").unwrap();
        assert_eq!(removed.name, "Bob");
        assert_eq!(book.len(), 1);
        assert!(book.get("bob").is_none());
    }

    #[test]
    fn test_delete_missing_leaves_book_unchanged() {
        let mut book = alice_and_bob();
        let before = book.contacts().to_vec();
        assert!(matches!(book.delete("Carol"), Err(BookError::NotFound(_))));
        assert_eq!(book.contacts(), before.as_slice());
    }

    #[test]
    fn test_delete_requires_exact_name() {
        let mut book = alice_and_bob();
        assert!(book.delete("Ali").is_err());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_update_blank_fields_unchanged() {
        let mut book = alice_and_bob();
        let update = ContactUpdate::new(Some(String::new()), Some(String::new()), Some(String::new()));
        let updated = book.update("alice", &update).unwrap().clone();
        assert_eq!(updated, Contact::new("Alice", "555-1111", "alice@example.com"));
    }

    #[test]
    fn test_update_partial() {
        let mut book = alice_and_bob();
        let update = ContactUpdate::new(Some("555-9999".into()), None, Some("12 High St".into()));
        book.update("ALICE", &update).unwrap();

        let alice = book.get("Alice").unwrap();
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.phone, "555-9999");
        assert_eq!(alice.email, "alice@example.com");
        assert_eq!(alice.address, "12 High St");
    }

    #[test]
    fn test_update_missing() {
        let mut book = alice_and_bob();
        let update = ContactUpdate::new(Some("1".into()), None, None);
        assert!(matches!(book.update("Carol", &update), Err(BookError::NotFound(ref n)) if n == "Carol"));
    }
}
