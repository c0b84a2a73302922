//! Square test matrices for the multiplication benchmarks.

use std::{fmt, fmt::Write as _, str::FromStr};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{BenchError, Scalar};

/// Generation pattern selecting how each element is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixKind {
    /// Independent uniform samples over `[0, 1)`.
    #[default]
    Random,
    Identity,
    Zeros,
    Ones,
}

impl MatrixKind {
    pub const ALL: [MatrixKind; 4] = [
        MatrixKind::Random,
        MatrixKind::Identity,
        MatrixKind::Zeros,
        MatrixKind::Ones,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatrixKind::Random => "random",
            MatrixKind::Identity => "identity",
            MatrixKind::Zeros => "zeros",
            MatrixKind::Ones => "ones",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixKind {
    type Err = BenchError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        MatrixKind::ALL
            .into_iter()
            .find(|kind| kind.name() == tag)
            .ok_or_else(|| BenchError::UnknownMatrixKind(tag.to_string()))
    }
}

/// Dense `n x n` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<Scalar>,
}

impl Matrix {
    /// Wraps row-major `data`; `data.len()` must equal `n * n`.
    pub fn from_row_major(n: usize, data: Vec<Scalar>) -> Option<Self> {
        (n > 0 && n.checked_mul(n) == Some(data.len())).then_some(Self { n, data })
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Scalar {
        self.data[row * self.n + col]
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Scalar]> {
        self.data.chunks_exact(self.n)
    }

    /// Sum of every element, used to eyeball parity between generated files.
    pub fn checksum(&self) -> Scalar {
        self.data.iter().sum()
    }

    /// Element-wise comparison within an absolute `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: Scalar) -> bool {
        self.n == other.n
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(lhs, rhs)| (lhs - rhs).abs() <= tolerance)
    }

    /// Renders the top-left `max x max` corner, marking truncated rows and columns with `...`.
    pub fn preview(&self, max: usize) -> String {
        let shown = self.n.min(max);
        let mut out = format!("Matrix ({}x{}):\n", self.n, self.n);
        for row in self.rows().take(shown) {
            for value in &row[..shown] {
                let _ = write!(out, "{value:8.4} ");
            }
            if shown < self.n {
                out.push_str("...");
            }
            out.push('\n');
        }
        if shown < self.n {
            out.push_str("...\n");
        }
        out
    }
}

/// Builds the generator handed to [`generate_matrix`].
///
/// A seed makes random-mode output reproducible; without one the stream is seeded from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Generates an `n x n` matrix of the requested kind. Only [`MatrixKind::Random`] draws from `rng`.
pub fn generate_matrix<R: Rng + ?Sized>(
    n: i32,
    kind: MatrixKind,
    rng: &mut R,
) -> Result<Matrix, BenchError> {
    let dim = usize::try_from(n)
        .ok()
        .filter(|dim| *dim > 0)
        .ok_or(BenchError::InvalidDimension(n.into()))?;
    let too_large = || BenchError::MatrixTooLarge(n.into());
    let len = dim.checked_mul(dim).ok_or_else(too_large)?;
    let mut data: Vec<Scalar> = Vec::new();
    data.try_reserve_exact(len).map_err(|_| too_large())?;

    match kind {
        MatrixKind::Random => data.extend((0..len).map(|_| rng.gen::<Scalar>())),
        MatrixKind::Identity => {
            data.extend((0..len).map(|idx| if idx / dim == idx % dim { 1.0 } else { 0.0 }))
        }
        MatrixKind::Zeros => data.resize(len, 0.0),
        MatrixKind::Ones => data.resize(len, 1.0),
    }

    tracing::debug!(n = dim, %kind, "generated matrix");
    Ok(Matrix { n: dim, data })
}
