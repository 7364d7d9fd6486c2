//! Reads integers from a file into a linked list, then filters and pivots it.
//!
//! ```bash
//! cargo run --bin llfilter -- numbers.txt --pivot 5
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use mary_heap::llrec::List;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "llfilter", about = "Filter and pivot a linked list of integers", version)]
struct Cli {
    /// File of whitespace separated integers
    path: PathBuf,

    /// Values less than or equal to this are filtered out / split off
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pivot: i64,
}

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(usage_exit_code(&err));
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

/// `--help` and `--version` succeed; any other argument error exits with 1
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn run(cli: Cli) -> Result<()> {
    let list = read_list(&cli.path)?;
    log::info!("read {} values from {}", list.len(), cli.path.display());
    println!("Original list: {list}");

    let kept: List<i64> = list.iter().copied().collect();
    let filtered = kept.filter(|v| *v <= cli.pivot);
    println!("Filtered list: {filtered}");

    let (smaller, larger) = list.pivot(&cli.pivot);
    println!("Smaller list:  {smaller}");
    println!("Larger list:   {larger}");

    Ok(())
}

fn read_list(path: &Path) -> Result<List<i64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("unable to read file {}", path.display()))?;
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("not an integer: {token:?}"))
        })
        .collect()
}
