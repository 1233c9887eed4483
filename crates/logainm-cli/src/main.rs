//! Command-line driver: abbreviate placenames given as arguments or read
//! line by line from stdin, printing each result with its length.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use logainm_abbr::{default_tables, AbbrTables, Abbreviator, DEFAULT_MAX_LEN};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Abbreviate Irish placenames for space-constrained signage"
)]
struct Opts {
    /// Placenames to abbreviate; with none given, reads one name per line
    /// from stdin.
    names: Vec<String>,

    /// Maximum display length, in characters.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// JSON file with replacement tables, instead of the built-in Irish set.
    #[arg(long)]
    tables: Option<PathBuf>,

    #[arg(long, env = "LOGAINM_LOG_LEVEL", default_value = "WARN")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_max_level(opts.log_level)
        .init();

    let tables = match &opts.tables {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            AbbrTables::from_json(&raw)
                .with_context(|| format!("loading tables from {}", path.display()))?
        }
        None => default_tables(),
    };
    let abbreviator = Abbreviator::with_max_len(tables, opts.max_len);

    if opts.names.is_empty() {
        for line in io::stdin().lock().lines() {
            let name = line.context("reading names from stdin")?;
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            report(&abbreviator, name);
        }
    } else {
        for name in &opts.names {
            report(&abbreviator, name);
        }
    }

    Ok(())
}

fn report(abbreviator: &Abbreviator, name: &str) {
    let result = abbreviator.abbreviate(name);
    println!("{} ({})", result.output, result.abbreviated_len);
}
