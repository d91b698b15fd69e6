//! Phonebook CLI
//!
//! Command-line front for the phonebook service.
//!
//! # Commands
//!
//! - `serve` - Run the HTTP server
//! - `list` - Print the directory, optionally filtered
//! - `show` - Print one record by id
//! - `add` - Create a record (duplicate names ask for confirmation)
//! - `remove` - Delete a record after confirmation
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Phonebook command-line tools.
#[derive(Parser)]
#[command(name = "phonebook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the phonebook server
    #[arg(global = true, short, long, default_value = "http://127.0.0.1:3001")]
    server: String,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the phonebook HTTP server
    Serve {
        /// Address to bind; when omitted, PORT from the environment (or
        /// 3001) decides
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Preload the classic sample directory
        #[arg(long)]
        seed: bool,
    },

    /// Print the directory
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Print one record
    Show {
        /// Record id
        id: String,
    },

    /// Add a record
    Add {
        /// Person name
        name: String,

        /// Phone number
        number: String,

        /// Skip the duplicate-name confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Remove a record
    Remove {
        /// Record id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve { bind, seed } => {
            commands::serve::run(bind, seed)?;
        }
        Commands::List { filter } => {
            commands::list::run(&cli.server, filter.as_deref())?;
        }
        Commands::Show { id } => {
            commands::show::run(&cli.server, &id)?;
        }
        Commands::Add {
            name,
            number,
            force,
        } => {
            commands::add::run(&cli.server, &name, &number, force)?;
        }
        Commands::Remove { id, yes } => {
            commands::remove::run(&cli.server, &id, yes)?;
        }
        Commands::Version => {
            println!("Phonebook CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
