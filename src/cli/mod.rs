use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::db::ContactBook;
use crate::models::{Contact, ContactUpdate};

pub mod add;
pub mod delete;
pub mod display;
pub mod list;
pub mod menu;
pub mod prompt;
pub mod search;
pub mod ui;
pub mod update;

pub use add::run_add;
pub use delete::run_delete;
pub use display::print_contacts;
pub use list::run_list;
pub use menu::{run_menu, MenuExit};
pub use search::run_search;
pub use update::run_update;

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Keep a small contact book in a JSON file")]
#[command(version)]
pub struct Cli {
    /// Backing file (default: $CONTACTBOOK_FILE or ./contacts.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new contact
    Add(AddArgs),
    /// List all contacts sorted by name
    List,
    /// Search by name or phone
    Search(SearchArgs),
    /// Delete a contact by name
    Delete(DeleteArgs),
    /// Update a contact's phone, email or address
    Update(UpdateArgs),
}

#[derive(Args)]
pub struct AddArgs {
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub phone: String,
    #[arg(short, long, default_value = "")]
    pub email: String,
    #[arg(short, long, default_value = "")]
    pub address: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Name fragment (any case) or phone fragment
    pub keyword: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub name: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub name: String,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub address: Option<String>,
}

/// Run one subcommand. Mutating commands save only when they succeeded;
/// returns true if the backing file was written.
pub fn run_command(book: &mut ContactBook, command: Commands) -> Result<bool> {
    let changed = match command {
        Commands::List => {
            run_list(book)?;
            false
        }
        Commands::Search(args) => {
            run_search(book, &args.keyword)?;
            false
        }
        Commands::Add(args) => {
            let contact = Contact::new(args.name.trim(), args.phone, args.email).with_address(args.address);
            run_add(book, contact)?
        }
        Commands::Delete(args) => run_delete(book, &args.name)?,
        Commands::Update(args) => {
            let update = ContactUpdate::new(args.phone, args.email, args.address);
            if update.is_empty() {
                ui::status("Nothing to update. Use -p, -e or -a to specify changes.");
                false
            } else {
                run_update(book, &args.name, &update)?
            }
        }
    };

    if changed {
        book.save()?;
        ui::status("Contacts saved to file.");
    }
    Ok(changed)
}
