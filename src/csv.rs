// src/csv.rs
//
// Plain-text half of export: quote-aware delimited writing, one file per
// sheet. xlsx encoding belongs to the spreadsheet writer downstream;
// multi-line cells survive here via standard quoting.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::consts::SHEET_NAME_MAX;
use crate::core::sanitize::{sanitize_filename, truncate_sheet_name};
use crate::sheet::SheetSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn as_char(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single delimited row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Render a whole grid to one delimited string.
pub fn grid_to_string(rows: &[Vec<String>], delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for r in rows {
        let _ = write_row(&mut buf, r, delim.as_char());
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Write one file per sheet under `dir`, named from the sanitized, capped
/// sheet name. Returns the paths written, in sheet order.
pub fn write_sheet_files(dir: &Path, sheets: &SheetSet, delim: Delim) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(sheets.len());
    for (name, grid) in sheets {
        let stem = truncate_sheet_name(&sanitize_filename(name), SHEET_NAME_MAX);
        let file_name = join!(&stem, ".", delim.extension());
        let path = dir.join(file_name);

        let file = fs::File::create(&path)?;
        let mut w = io::BufWriter::new(file);
        for row in grid {
            write_row(&mut w, row, delim.as_char())?;
        }
        w.flush()?;

        written.push(path);
    }
    Ok(written)
}
