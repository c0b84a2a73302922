//! Matrix file formats read by the benchmark programs.
//!
//! Binary layout (native byte order, no padding):
//! - offset 0: `i32` dimension `n` (the matrix is always square)
//! - offset 4: `n * n` `f64` elements in row-major order
//!
//! The text layout is one line per row with elements formatted as `%.6f` and separated by a
//! single space.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    mem::size_of,
    path::Path,
};

use anyhow::{Context, Result};

use crate::{matrix::Matrix, BenchError, Scalar};

const HEADER_BYTES: usize = size_of::<i32>();

/// Exact size in bytes of the binary encoding of an `n x n` matrix.
pub fn binary_len(n: usize) -> usize {
    HEADER_BYTES + size_of::<Scalar>() * n * n
}

/// Writes `matrix` in the binary layout, creating or truncating `path`.
pub fn write_matrix_binary(matrix: &Matrix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let header = i32::try_from(matrix.dim())
        .with_context(|| format!("matrix dimension {} does not fit in i32", matrix.dim()))?;

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&header.to_ne_bytes())?;
    writer.write_all(bytemuck::cast_slice(matrix.as_slice()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write matrix to {}", path.display()))?;

    tracing::debug!(
        n = matrix.dim(),
        bytes = binary_len(matrix.dim()),
        path = %path.display(),
        "wrote binary matrix"
    );
    Ok(())
}

/// Writes `matrix` as whitespace-delimited text, creating or truncating `path`.
pub fn write_matrix_text(matrix: &Matrix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for row in matrix.rows() {
        let line = row
            .iter()
            .map(|value| format!("{value:.6}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write matrix to {}", path.display()))?;

    tracing::debug!(n = matrix.dim(), path = %path.display(), "wrote text matrix");
    Ok(())
}

/// Loads a matrix previously written by [`write_matrix_binary`].
pub fn read_matrix_binary(path: impl AsRef<Path>) -> Result<Matrix> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let malformed = |reason: String| BenchError::MalformedMatrixFile {
        path: path.to_path_buf(),
        reason,
    };

    if bytes.len() < HEADER_BYTES {
        return Err(malformed(format!("{} bytes is too short for the header", bytes.len())).into());
    }
    let header = i32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let n = usize::try_from(header)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| malformed(format!("invalid dimension {header}")))?;

    let expected = n
        .checked_mul(n)
        .and_then(|len| len.checked_mul(size_of::<Scalar>()))
        .and_then(|payload| payload.checked_add(HEADER_BYTES))
        .ok_or_else(|| malformed(format!("dimension {n} overflows the payload size")))?;
    if bytes.len() != expected {
        return Err(malformed(format!(
            "expected {expected} bytes for a {n}x{n} matrix, found {}",
            bytes.len()
        ))
        .into());
    }

    let data: Vec<Scalar> = bytes[HEADER_BYTES..]
        .chunks_exact(size_of::<Scalar>())
        .map(bytemuck::pod_read_unaligned::<Scalar>)
        .collect();
    Matrix::from_row_major(n, data)
        .ok_or_else(|| malformed("payload does not form a square matrix".to_string()).into())
}
