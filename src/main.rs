use clap::Parser;
use contactbook::cli::ui::warn_if_reset;
use contactbook::cli::{run_command, run_menu, Cli};
use contactbook::config::BookConfig;
use contactbook::db::ContactBook;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BookConfig::resolve(cli.file);
    let mut book = ContactBook::open_at(&config.path)?;

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu.
            // It prints the load warning itself, after clearing the screen.
            run_menu(&mut book)?;
        }
        Some(command) => {
            warn_if_reset(book.load_status());
            run_command(&mut book, command)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}
