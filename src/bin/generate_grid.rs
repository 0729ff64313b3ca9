use anyhow::bail;
use clap::Parser;
use clap::ValueEnum;
use pipegrid::grid::Grid;
use pipegrid::{io, mapgen, svg};
use std::fs;

#[derive(Parser)]
struct Cli {
    /// Region width.
    #[clap(long, short = 'x', default_value_t = 10)]
    width: i64,
    /// Region height.
    #[clap(long, short = 'y', default_value_t = 10)]
    height: i64,
    /// Number of sink cells.
    #[clap(long, short = 'k', default_value_t = 3)]
    sinks: usize,
    /// Probability that a free cell holds a pipe segment.
    #[clap(long, short = 'd', default_value_t = 0.6)]
    density: f64,
    /// Path to output file. If not provided, outputs to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
    /// File format: text, json or svg. If not provided, infers from output file extension.
    #[clap(long, short = 'f', default_value = "unspecified")]
    format: Format,
    #[clap(long, short = 'c', default_value_t = false)]
    compact: bool,
    #[clap(long, short = 's')]
    seed: Option<u64>,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Unspecified,
    Text,
    Json,
    Svg,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let records =
        mapgen::random::generate_records(args.width, args.height, args.sinks, args.density, args.seed);
    // Infer format from output file extension if not specified.
    let format = if args.format == Format::Unspecified {
        if args.output.ends_with(".txt") {
            Format::Text
        } else if args.output.ends_with(".json") {
            Format::Json
        } else if args.output.ends_with(".svg") {
            Format::Svg
        } else if args.output.is_empty() {
            Format::Text
        } else {
            bail!("Cannot infer format from output file extension. Specify format with -f option.")
        }
    } else {
        args.format.clone()
    };

    use std::io::Write;

    let mut w: Box<dyn Write> = if args.output.is_empty() {
        Box::new(std::io::stdout())
    } else {
        Box::new(fs::File::create(&args.output)?)
    };

    match format {
        Format::Text => {
            w.write_all(io::format_text(&records).as_bytes())?;
        }
        Format::Json => {
            let file = io::GridFile { cells: records };
            if args.compact {
                serde_json::to_writer(&mut w, &file)?;
            } else {
                serde_json::to_writer_pretty(&mut w, &file)?;
            }
        }
        Format::Svg => {
            let grid = Grid::from_records(&records)?;
            let svg_content = svg::render(&grid);
            w.write_all(svg_content.as_bytes())?;
        }
        Format::Unspecified => {
            unreachable!()
        }
    }
    Ok(())
}
