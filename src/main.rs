mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Session, Target};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taqweem")]
#[command(about = "Browse the Saudi school calendar, count down to events and export them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available Hijri years
    Years,
    /// Show the events of a year
    List {
        /// Hijri year (defaults to the saved year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Search names, Hijri dates or Gregorian dates (YYYY/MM/DD)
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show the next upcoming event
    Next {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Live countdowns, refreshed every second until Ctrl-C
    Watch {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        query: Option<String>,
    },
    /// Save an event as an .ics file
    Export {
        /// Event id (e.g. "1447_fall_break")
        id: Option<String>,

        /// Export the next upcoming event instead
        #[arg(long, conflicts_with = "id")]
        next: bool,

        /// Year used with --next
        #[arg(short, long, requires = "next")]
        year: Option<i32>,

        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print schema.org JSON-LD for the listed events
    Schema {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print a share message and WhatsApp link for an event
    Share {
        id: Option<String>,

        #[arg(long, conflicts_with = "id")]
        next: bool,

        #[arg(short, long, requires = "next")]
        year: Option<i32>,

        /// Open the share link in the browser
        #[arg(long)]
        open: bool,
    },
    /// Print an event's dates as plain text
    Copy { id: String },
    /// Save the selected year
    Year { year: i32 },
    /// Show or set the theme ("light" or "dark"); toggles when omitted
    Theme { theme: Option<String> },
    /// Print the page title and description for a year
    Meta {
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Initialize logging on stderr, filtered by RUST_LOG (default: warn).
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut session = Session::load()?;

    match cli.command {
        Commands::Years => commands::years::run(&session),
        Commands::List { year, query } => commands::list::run(&session, year, query),
        Commands::Next { year } => commands::next::run(&session, year),
        Commands::Watch { year, query } => commands::watch::run(&session, year, query).await,
        Commands::Export { id, next, year, out } => {
            let target = Target::from_args(id, next, year)?;
            commands::export::run(&session, target, out)
        }
        Commands::Schema { year, query } => commands::schema::run(&session, year, query),
        Commands::Share { id, next, year, open } => {
            let target = Target::from_args(id, next, year)?;
            commands::share::run(&session, target, open)
        }
        Commands::Copy { id } => commands::copy::run(&session, &id),
        Commands::Year { year } => commands::year::run(&mut session, year),
        Commands::Theme { theme } => commands::theme::run(&mut session, theme),
        Commands::Meta { year } => commands::meta::run(&session, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_requires_id_or_next() {
        let cli = Cli::try_parse_from(["taqweem", "export", "--next", "-y", "1448"]).unwrap();
        match cli.command {
            Commands::Export { id, next, year, .. } => {
                assert!(id.is_none());
                assert!(next);
                assert_eq!(year, Some(1448));
                assert!(matches!(
                    Target::from_args(id, next, year).unwrap(),
                    Target::Next { year: Some(1448) }
                ));
            }
            _ => panic!("expected export"),
        }

        assert!(Cli::try_parse_from(["taqweem", "export", "a", "--next"]).is_err());
        assert!(Target::from_args(None, false, None).is_err());
    }
}
