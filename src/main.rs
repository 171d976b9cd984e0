use clap::{Parser, Subcommand};
use serde::Serialize;
use show_finder::presentation::{render_episodes, render_shows};
use show_finder::{Config, DEFAULT_API_BASE, Outcome, ShowFinder, ShowFinderError, TvMazeTransport};
use std::process;
use tracing_subscriber::EnvFilter;

/// Search TVmaze for shows and list their episodes
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Base URL of the TVmaze API
    #[arg(long, global = true, env = "SHOW_FINDER_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Print the records (or the error envelope) as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for shows by name
    Search {
        /// Search terms, joined with spaces
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// List the episodes of a show
    Episodes {
        /// TVmaze show id, as printed by `search`
        show_id: u64,

        /// Show name, used in headings and error messages
        show_name: String,
    },
}

fn main() {
    // Logs go to stderr so `--json` output stays parseable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Runs the selected command; returns whether real records were printed.
fn run(cli: Cli) -> Result<bool, ShowFinderError> {
    let config = Config::new(&cli.api_base)?;
    let finder = ShowFinder::new(TvMazeTransport::new(), config);

    match cli.command {
        Command::Search { query } => {
            let outcome = finder.search_shows(&query.join(" "));
            if cli.json {
                print_json(&outcome);
            } else {
                print!("{}", render_shows(&outcome));
            }
            Ok(outcome.is_ok())
        }
        Command::Episodes { show_id, show_name } => {
            let outcome = finder.list_episodes(show_id, &show_name);
            if cli.json {
                print_json(&outcome);
            } else {
                print!("{}", render_episodes(&outcome, show_id, &show_name));
            }
            Ok(outcome.is_ok())
        }
    }
}

fn print_json<R: Serialize>(outcome: &Outcome<R>) {
    let rendered = match outcome {
        Ok(records) => serde_json::to_string_pretty(records),
        Err(envelope) => serde_json::to_string_pretty(envelope),
    };

    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}
