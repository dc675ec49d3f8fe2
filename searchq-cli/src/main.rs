//! sq: parse search box queries from the command line.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sq")]
#[command(about = "Search Query - parse search box queries into key/value clauses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse queries and print their clauses
    #[command(visible_alias = "p")]
    Parse {
        /// Queries to parse (reads one query per stdin line if none given)
        queries: Vec<String>,

        /// Output format: text, json, debug (default from config)
        #[arg(short = 'f', long = "format")]
        format: Option<String>,

        /// Pretty-print JSON output
        #[arg(long = "pretty")]
        pretty: bool,
    },

    /// Check that queries parse, reporting the first bad character
    Check {
        /// Queries to check (reads one query per stdin line if none given)
        queries: Vec<String>,

        /// Only set the exit status
        #[arg(short = 'q', long = "quiet")]
        quiet: bool,
    },

    /// Show or initialize configuration
    Config {
        /// Write a default config.toml if none exists
        #[arg(long = "init")]
        init: bool,
    },
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SEARCHQ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Parse { queries, format, pretty } => {
            commands::parse(&queries, format.as_deref(), pretty)
        }
        Commands::Check { queries, quiet } => commands::check(&queries, quiet),
        Commands::Config { init } => commands::config(init),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
