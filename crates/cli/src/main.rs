// rostercheck CLI - headless roster reconciliation

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use rostercheck_cli::check::{cmd_check, cmd_parse, CheckArgs};
use rostercheck_cli::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "rcheck")]
#[command(about = "Check which entries of one roster appear in another")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a subset roster against a master roster
    #[command(after_help = "\
Examples:
  rcheck check members.csv graduates.csv
  rcheck check members.csv graduates.csv --json
  rcheck check members.csv graduates.csv --export matched.csv --analyze
  rcheck check members.txt graduates.csv --markers markers.toml --output report.json")]
    Check {
        /// Roster to be checked (the subset)
        subset: PathBuf,

        /// Authoritative roster (the master)
        master: PathBuf,

        /// Print the full report as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write matched and unmatched rows as CSV
        #[arg(long)]
        export: Option<PathBuf>,

        /// Include a narrative analysis in the report
        #[arg(long)]
        analyze: bool,

        /// TOML file overriding the header marker keywords
        #[arg(long)]
        markers: Option<PathBuf>,
    },

    /// Parse a single roster file and dump its records as JSON
    #[command(after_help = "\
Examples:
  rcheck parse members.csv
  rcheck parse graduates.csv --master")]
    Parse {
        /// Roster file to parse
        file: PathBuf,

        /// Tag records as coming from the master roster
        #[arg(long)]
        master: bool,

        /// TOML file overriding the header marker keywords
        #[arg(long)]
        markers: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            subset,
            master,
            json,
            output,
            export,
            analyze,
            markers,
        } => cmd_check(CheckArgs {
            subset,
            master,
            json,
            output,
            export,
            analyze,
            markers,
        }),
        Commands::Parse { file, master, markers } => cmd_parse(file, master, markers),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}
