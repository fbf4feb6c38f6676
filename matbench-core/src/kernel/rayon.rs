use rayon::prelude::*;

use super::{check_operands, ExecutionModel, Kernel};
use crate::{Matrix, Result};

/// Row-parallel CPU kernel: each output row is computed independently on
/// the rayon thread pool. Thread-pool startup is lazy in rayon, hence
/// the warm-up requirement.
pub struct RayonKernel;

impl Kernel for RayonKernel {
    fn name(&self) -> &str {
        "rayon"
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::Synchronous
    }

    fn warmup_iters(&self) -> usize {
        super::WARMUP_ITERATIONS
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_operands(a, b)?;
        let lhs = a.as_slice();
        let rhs = b.as_slice();
        let mut out = vec![0.0f64; n * n];
        out.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut sum = 0.0f64;
                for k in 0..n {
                    sum += lhs[i * n + k] * rhs[k * n + j];
                }
                *cell = sum;
            }
        });
        Ok(Matrix::from_raw(n, out))
    }
}
