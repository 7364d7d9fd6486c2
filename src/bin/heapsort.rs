//! Reads integers from a file and prints them in input order, then in heap
//! pop order.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin heapsort -- numbers.txt --arity 4
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use mary_heap::{Comparator, Greater, Less, MaryHeap};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "heapsort", about = "Sort integers by draining an m-ary heap", version)]
struct Cli {
    /// File of whitespace separated integers
    path: PathBuf,

    /// Children per heap node
    #[arg(long, short = 'm', default_value_t = mary_heap::mary::DEFAULT_ARITY)]
    arity: usize,

    /// Pop smallest first instead of largest first
    #[arg(long)]
    ascending: bool,
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
    let values = read_values(&cli.path)?;
    log::info!("read {} values from {}", values.len(), cli.path.display());

    println!("original list: {}", join(&values));

    let popped = if cli.ascending {
        drain(&values, cli.arity, Less)?
    } else {
        drain(&values, cli.arity, Greater)?
    };
    println!("popped list:   {}", join(&popped));

    Ok(())
}

fn read_values(path: &Path) -> Result<Vec<i64>> {
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

fn drain<C: Comparator<i64>>(values: &[i64], arity: usize, comparator: C) -> Result<Vec<i64>> {
    let mut heap = MaryHeap::with_capacity(arity, comparator, values.len())?;
    heap.extend(values.iter().copied());
    Ok(heap.drain_sorted().collect())
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
