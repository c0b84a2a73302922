//! CSV experiment log loading.
//!
//! The first record names the columns. Each following record becomes a [`Row`] keyed by those
//! names; short records leave their trailing columns absent and extra fields are dropped.

use std::{collections::HashMap, io::Read, path::Path};

use anyhow::{Context, Result};

use crate::BenchError;

/// One data record keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Value for `header`, or an empty string when the record has no such column.
    pub fn get(&self, header: &str) -> &str {
        self.values.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Parsed CSV file: ordered column names plus every data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl RecordSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Loads the CSV file at `path`, treating its first record as the header.
pub fn load_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BenchError::InputNotFound(path.to_path_buf()).into());
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let records =
        read_records(reader).with_context(|| format!("failed to parse {}", path.display()))?;

    tracing::debug!(
        columns = records.headers.len(),
        rows = records.len(),
        path = %path.display(),
        "loaded CSV records"
    );
    Ok(records)
}

/// Parses CSV text from any reader; used for in-memory sources.
pub fn parse_records<R: Read>(input: R) -> Result<RecordSet> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<RecordSet> {
    let headers: Vec<String> = reader
        .headers()
        .context("failed to read CSV header")?
        .iter()
        .map(String::from)
        .collect();
    if headers.is_empty() {
        return Err(BenchError::MissingHeader.into());
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("failed to read CSV record {}", idx + 1))?;
        // Later duplicate column names overwrite earlier ones.
        rows.push(Row::from_pairs(
            headers.iter().map(String::as_str).zip(record.iter()),
        ));
    }

    Ok(RecordSet { headers, rows })
}
