use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Error, Result};

/// A dense square matrix in row-major order.
///
/// Squareness is enforced at every construction site, so holding a
/// `Matrix` is proof that `data.len() == size * size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from nested rows, validating that the input is
    /// square and non-empty.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::InvalidInput {
                reason: "matrix has no rows".to_string(),
            });
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(Error::InvalidInput {
                    reason: format!(
                        "row {i} has {} elements, expected {size}",
                        row.len()
                    ),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { size, data })
    }

    pub(crate) fn from_raw(size: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { size, data }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// The underlying row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over rows as contiguous slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.size)
    }

    /// Elementwise comparison within an absolute tolerance.
    pub fn allclose(&self, other: &Matrix, tolerance: f64) -> bool {
        self.size == other.size
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

/// Produces random square matrices with independent integer draws in
/// `[0, 100)`, stored as `f64`.
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A generator with a fixed seed, for deterministic tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a `size` x `size` matrix of independent draws.
    ///
    /// Called once per operand; successive calls consume fresh draws, so
    /// generating A and B never yields the same matrix by aliasing.
    pub fn generate(&mut self, size: usize) -> Result<Matrix> {
        if size == 0 {
            return Err(Error::InvalidSize { size });
        }
        let data = (0..size * size)
            .map(|_| f64::from(self.rng.random_range(0..100u32)))
            .collect();
        Ok(Matrix::from_raw(size, data))
    }
}

impl Default for MatrixGenerator {
    fn default() -> Self {
        Self::new()
    }
}
