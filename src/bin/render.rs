use anyhow::{Context, Result};
use clap::Parser;
use pipegrid::grid::Grid;
use pipegrid::{io, svg};

/// Renders a pipe-grid input as an SVG document.
#[derive(Parser, Debug)]
struct Cli {
    /// Read input from file instead of stdin
    #[arg(short = 'i', long = "input")]
    input: Option<String>,
    /// Path to output file. If not provided, outputs to stdout.
    #[arg(short = 'o', long = "output", default_value = "")]
    output: String,
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
    let grid = Grid::from_records(&records)?;
    let svg_content = svg::render(&grid);

    use std::io::Write;
    let mut w: Box<dyn Write> = if cli.output.is_empty() {
        Box::new(std::io::stdout())
    } else {
        Box::new(std::fs::File::create(&cli.output)?)
    };
    w.write_all(svg_content.as_bytes())?;
    Ok(())
}
