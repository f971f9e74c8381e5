//! Numbered main menu
//!
//! Reads one line per prompt, runs one book operation per pass, and writes
//! the book back only when the user picks "Save & Exit".

use anyhow::Result;
use std::io::{self, IsTerminal};
use tracing::debug;

use crate::cli::add::{prompt_contact, run_add};
use crate::cli::delete::run_delete;
use crate::cli::list::run_list;
use crate::cli::prompt::{InquirePrompter, LinePrompter, Prompter};
use crate::cli::search::run_search;
use crate::cli::ui::{clear_screen, error, status, warn_if_reset, warning};
use crate::cli::update::prompt_update;
use crate::db::ContactBook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Add,
    ViewAll,
    Search,
    Delete,
    Update,
    SaveExit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Add,
        MenuOption::ViewAll,
        MenuOption::Search,
        MenuOption::Delete,
        MenuOption::Update,
        MenuOption::SaveExit,
    ];

    fn number(self) -> usize {
        match self {
            MenuOption::Add => 1,
            MenuOption::ViewAll => 2,
            MenuOption::Search => 3,
            MenuOption::Delete => 4,
            MenuOption::Update => 5,
            MenuOption::SaveExit => 6,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuOption::Add => "Add Contact",
            MenuOption::ViewAll => "View All Contacts",
            MenuOption::Search => "Search Contact",
            MenuOption::Delete => "Delete Contact",
            MenuOption::Update => "Update Contact",
            MenuOption::SaveExit => "Save & Exit",
        }
    }

    fn from_input(s: &str) -> Option<MenuOption> {
        let s = s.trim();
        MenuOption::ALL
            .iter()
            .find(|opt| opt.number().to_string() == s)
            .copied()
    }
}

/// How the menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// "Save & Exit" was chosen and the book was written
    Saved,
    /// Input ended or was cancelled; nothing was written
    Abandoned,
}

/// Run the interactive main menu on stdin
pub fn run_menu(book: &mut ContactBook) -> Result<MenuExit> {
    if io::stdin().is_terminal() {
        // Degraded but functional if the clear fails
        let _ = clear_screen();
        // Must come after the clear
        warn_if_reset(book.load_status());
        run_menu_with(book, &mut InquirePrompter)
    } else {
        warn_if_reset(book.load_status());
        let stdin = io::stdin();
        run_menu_with(book, &mut LinePrompter::new(stdin.lock()))
    }
}

pub fn run_menu_with<P: Prompter>(book: &mut ContactBook, prompter: &mut P) -> Result<MenuExit> {
    loop {
        print_menu();

        let Some(input) = prompter.ask("Choose an option (1-6)")? else {
            warning("Input closed; unsaved changes were discarded.");
            return Ok(MenuExit::Abandoned);
        };

        let Some(choice) = MenuOption::from_input(&input) else {
            status("Invalid option. Please enter a number between 1 and 6.");
            continue;
        };
        debug!(?choice, "menu selection");

        if execute_command(book, prompter, choice)? {
            return Ok(MenuExit::Saved);
        }
    }
}

fn print_menu() {
    println!("\n===== Contact Book Menu =====");
    for opt in MenuOption::ALL {
        println!("{}. {}", opt.number(), opt.label());
    }
}

/// Execute a menu command.
/// Returns Ok(true) once the book has been saved and the loop should end.
fn execute_command<P: Prompter>(book: &mut ContactBook, prompter: &mut P, choice: MenuOption) -> Result<bool> {
    match choice {
        MenuOption::Add => {
            match prompt_contact(prompter)? {
                Some(contact) => {
                    run_add(book, contact)?;
                }
                None => status("Cancelled."),
            }
            Ok(false)
        }
        MenuOption::ViewAll => run_list(book).map(|_| false),
        MenuOption::Search => {
            match prompter.ask("Enter name or phone to search")? {
                Some(keyword) => {
                    run_search(book, &keyword)?;
                }
                None => status("Cancelled."),
            }
            Ok(false)
        }
        MenuOption::Delete => {
            match prompter.ask("Enter contact name to delete")? {
                Some(name) => {
                    run_delete(book, &name)?;
                }
                None => status("Cancelled."),
            }
            Ok(false)
        }
        MenuOption::Update => {
            match prompter.ask("Enter contact name to update")? {
                Some(name) => {
                    prompt_update(book, prompter, &name)?;
                }
                None => status("Cancelled."),
            }
            Ok(false)
        }
        MenuOption::SaveExit => match book.save() {
            Ok(_) => {
                status("Contacts saved to file.");
                status("Goodbye!");
                Ok(true)
            }
            Err(e) => {
                // Keep the session alive so nothing in memory is lost
                error(&format!("Could not save contacts: {}", e));
                Ok(false)
            }
        },
    }
}
