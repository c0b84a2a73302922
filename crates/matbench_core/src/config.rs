//! Settings for the two matbench tools, with defaults mirroring their command-line flags.

use std::path::{Path, PathBuf};

use crate::matrix::MatrixKind;

/// On-disk encoding for a generated matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixFormat {
    /// `i32` dimension header followed by row-major `f64` data.
    #[default]
    Binary,
    /// One `%.6f` row per line.
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub size: i32,
    pub kind: MatrixKind,
    pub output: PathBuf,
    pub format: MatrixFormat,
    /// Only affects [`MatrixKind::Random`].
    pub seed: Option<u64>,
    /// Print the top-left corner of at most this many rows and columns after saving.
    pub preview: Option<usize>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            size: 1024,
            kind: MatrixKind::Random,
            output: PathBuf::from("matrix.bin"),
            format: MatrixFormat::Binary,
            seed: None,
            preview: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl ExportSettings {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    /// Explicit output path, or the input path with its extension replaced by `.md`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| markdown_path_for(&self.input))
    }
}

fn markdown_path_for(input: &Path) -> PathBuf {
    input.with_extension("md")
}
