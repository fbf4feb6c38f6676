use super::{check_operands, ExecutionModel, Kernel};
use crate::{Matrix, Result};

/// Triple-nested-loop reference implementation.
///
/// Accumulates in `f64` in left-to-right summation order with no
/// reordering, which makes it the correctness oracle the other kernels
/// are compared against.
pub struct NaiveKernel;

impl Kernel for NaiveKernel {
    fn name(&self) -> &str {
        "naive"
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::Synchronous
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_operands(a, b)?;
        let lhs = a.as_slice();
        let rhs = b.as_slice();
        let mut out = vec![0.0f64; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0f64;
                for k in 0..n {
                    sum += lhs[i * n + k] * rhs[k * n + j];
                }
                out[i * n + j] = sum;
            }
        }
        Ok(Matrix::from_raw(n, out))
    }
}
