//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "In-memory student course tracker")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration and print its summary
    Demo,

    /// Print the aggregate summary of a roster
    Summary {
        /// Path to a .toml roster
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Output format: text, json, table
        #[arg(long)]
        format: Option<String>,
    },

    /// Print the report for one student
    Student {
        /// Path to a .toml roster
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Student name
        #[arg(long)]
        name: String,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,
    },

    /// List every student in a roster
    List {
        /// Path to a .toml roster
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Validate a roster file
    Validate {
        /// Path to a .toml roster
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Create starter config and example roster
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo::execute(),
        Commands::Summary { roster, format } => commands::summary::execute(roster, format, config),
        Commands::Student {
            roster,
            name,
            format,
        } => commands::student::execute(roster, name, format, config),
        Commands::List { roster } => commands::list::execute(roster, config),
        Commands::Validate { roster } => commands::validate::execute(roster, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
