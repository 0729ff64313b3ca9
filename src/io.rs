use anyhow::{Context, Result, bail};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::grid::Record;

/// On-disk JSON form of a record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFile {
    pub cells: Vec<Record>,
}

/// Parses an ordered record list from either supported format.
///
/// If the input begins with `{`, the entire input is treated as a JSON
/// [`GridFile`] document. Otherwise it is plain text with one
/// `<symbol> <x> <y>` record per line; blank lines are skipped.
pub fn parse_records(input: &str) -> Result<Vec<Record>> {
    let s = input.trim_start();
    if s.starts_with('{') {
        let parsed: GridFile = serde_json::from_str(s).context("invalid JSON grid document")?;
        return Ok(parsed.cells);
    }
    parse_text(input)
}

fn parse_text(input: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(symbol), Some(x), Some(y), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            bail!(
                "line {}: expected `<symbol> <x> <y>`, got {:?}",
                lineno + 1,
                line
            );
        };
        let mut chars = symbol.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            bail!(
                "line {}: symbol must be a single character, got {:?}",
                lineno + 1,
                symbol
            );
        };
        let x = x
            .parse()
            .with_context(|| format!("line {}: invalid x coordinate {:?}", lineno + 1, x))?;
        let y = y
            .parse()
            .with_context(|| format!("line {}: invalid y coordinate {:?}", lineno + 1, y))?;
        records.push(Record { symbol, x, y });
    }
    Ok(records)
}

/// Reads records from any reader (stdin, a file) to EOF.
pub fn read_records(reader: &mut dyn std::io::Read) -> Result<Vec<Record>> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("failed to read input")?;
    parse_records(&input)
}

/// Formats records in the plain text format, one record per line.
pub fn format_text(records: &[Record]) -> String {
    let mut out = records
        .iter()
        .map(|r| format!("{} {} {}", r.symbol, r.x, r.y))
        .join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
