//! Markdown table export for CSV experiment logs.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::{
    records::{RecordSet, Row},
    BenchError,
};

/// Writes a header line, a `---` separator line and one line per row, columns in `headers` order.
pub fn render_markdown_table<W: Write>(
    out: &mut W,
    headers: &[String],
    rows: &[Row],
) -> Result<()> {
    if headers.is_empty() {
        return Err(BenchError::EmptyHeaders.into());
    }
    write_line(out, headers.iter().map(String::as_str))?;
    write_line(out, headers.iter().map(|_| "---"))?;
    for row in rows {
        write_line(out, headers.iter().map(|header| row.get(header)))?;
    }
    Ok(())
}

/// Renders the table into `path`, creating or truncating it. Nothing is created when `headers` is empty.
pub fn write_markdown_table(
    headers: &[String],
    rows: &[Row],
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    // Checked again here so an invalid table never creates or truncates `path`.
    if headers.is_empty() {
        return Err(BenchError::EmptyHeaders.into());
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    render_markdown_table(&mut writer, headers, rows)?;
    writer
        .flush()
        .with_context(|| format!("failed to write Markdown table to {}", path.display()))?;

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        path = %path.display(),
        "wrote Markdown table"
    );
    Ok(())
}

/// Convenience wrapper for a whole [`RecordSet`].
pub fn write_record_set(records: &RecordSet, path: impl AsRef<Path>) -> Result<()> {
    write_markdown_table(&records.headers, &records.rows, path)
}

fn write_line<'a, W: Write>(out: &mut W, cells: impl Iterator<Item = &'a str>) -> Result<()> {
    let cells: Vec<&str> = cells.collect();
    writeln!(out, "| {} |", cells.join(" | "))?;
    Ok(())
}
