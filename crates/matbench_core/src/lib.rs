//! Core matbench logic shared by the command-line tools.
//!
//! This crate hosts:
//! - deterministic square matrix generation for the multiplication benchmarks
//! - the binary and text matrix file formats consumed by the benchmark programs
//! - CSV experiment log loading and Markdown table export

pub mod config;
pub mod error;
pub mod markdown;
pub mod matrix;
pub mod matrix_io;
pub mod records;

/// Element type of every generated matrix.
pub type Scalar = f64;

pub use error::BenchError;
pub use matrix::{generate_matrix, seeded_rng, Matrix, MatrixKind};
pub use records::{load_records, RecordSet, Row};
