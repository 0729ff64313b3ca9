use anyhow::{Context, Result};
use clap::Parser;
use pipegrid::io;
use pipegrid::traverse::Puzzle;

/// Computes which sinks are reachable from the source of a pipe grid.
#[derive(Parser, Debug)]
struct Cli {
    /// Read input from file instead of stdin
    #[arg(short = 'i', long = "input")]
    input: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let records = match &cli.input {
        Some(path) => {
            let input = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path))?;
            io::parse_records(&input)?
        }
        None => io::read_records(&mut std::io::stdin())?,
    };
    let puzzle = Puzzle::from_records(&records)?;
    println!("{}", puzzle.connected_sinks());
    Ok(())
}
