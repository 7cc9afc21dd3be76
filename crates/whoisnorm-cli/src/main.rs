use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use whoisnorm_core::{normalize_json, WhoisRecord};

/// whoisnorm — WHOIS record normalizer
///
/// Decode provider lookup documents and print the canonical record.
#[derive(Parser)]
#[command(name = "whoisnorm", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a provider document into the canonical record
    Parse {
        /// Path to a JSON lookup document
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the canonical fingerprint (SHA-256) of a document's record
    Hash {
        /// Path to a JSON lookup document
        file: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Parse { file, json } => cmd_parse(&file, json),
        Commands::Hash { file } => cmd_hash(&file),
        Commands::Version => {
            println!(
                "whoisnorm {} (whoisnorm-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

// ── Commands ──────────────────────────────────────────────

fn cmd_parse(file: &Path, json: bool) -> i32 {
    let record = match load_record(file) {
        Ok(record) => record,
        Err(message) => return fail(&message),
    };

    if json {
        return match serde_json::to_string_pretty(&record) {
            Ok(out) => {
                println!("{}", out);
                0
            }
            Err(e) => fail(&format!("cannot encode record: {}", e)),
        };
    }

    for (name, value) in record.fields() {
        let label = format!("{:>15}", name);
        match value {
            Some(rendered) => println!("{}: {}", label.cyan(), rendered.green()),
            None => println!("{}: {}", label.cyan(), "~".dimmed()),
        }
    }
    if record.is_empty() {
        eprintln!("{}", "no recognizable fields in document".yellow());
    }
    0
}

fn cmd_hash(file: &Path) -> i32 {
    match load_record(file) {
        Ok(record) => {
            println!("{}", record.fingerprint());
            0
        }
        Err(message) => fail(&message),
    }
}

// ── Helpers ───────────────────────────────────────────────

fn load_record(file: &Path) -> Result<WhoisRecord, String> {
    let text =
        fs::read_to_string(file).map_err(|e| format!("cannot read {}: {}", file.display(), e))?;
    normalize_json(&text).map_err(|e| format!("{}: {}", file.display(), e))
}

fn fail(message: &str) -> i32 {
    eprintln!("{} {}", "error:".red().bold(), message);
    2
}
