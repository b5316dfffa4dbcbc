// src/csv.rs
use std::io::{self, Write};

use crate::table::FilmographyTable;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Write the whole table, optionally preceded by the `Title`/`Year` header.
pub fn write_table<W: Write>(
    mut w: W,
    table: &FilmographyTable,
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &FilmographyTable::HEADERS, sep)?;
    }
    for record in table.to_records() {
        write_row(&mut w, &record, sep)?;
    }
    w.flush()
}
