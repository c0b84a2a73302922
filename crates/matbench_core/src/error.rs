//! Domain failures surfaced by the matbench tools.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("CSV file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("CSV file is empty.")]
    EmptyInput,

    #[error("CSV file must include a header row.")]
    MissingHeader,

    #[error("Markdown table requires at least one header")]
    EmptyHeaders,

    #[error("Unknown matrix type: {0} (expected one of random, identity, zeros, ones)")]
    UnknownMatrixKind(String),

    #[error("Matrix dimension must be a positive integer, got {0}")]
    InvalidDimension(i64),

    #[error("Matrix dimension {0} is too large to allocate")]
    MatrixTooLarge(i64),

    #[error("malformed matrix file {}: {reason}", .path.display())]
    MalformedMatrixFile { path: PathBuf, reason: String },
}
