use gemm::{gemm, Parallelism};

use super::{check_operands, ExecutionModel, Kernel};
use crate::{Matrix, Result};

/// Library-backed CPU kernel dispatching to the `gemm` crate, treated as
/// an opaque correct oracle.
pub struct GemmKernel;

impl Kernel for GemmKernel {
    fn name(&self) -> &str {
        "gemm"
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::Synchronous
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_operands(a, b)?;
        let lhs = a.as_slice();
        let rhs = b.as_slice();
        let mut out = vec![0.0f64; n * n];

        let num_threads = num_cpus::get();
        let parallelism = if num_threads > 1 {
            Parallelism::Rayon(num_threads)
        } else {
            Parallelism::None
        };

        // cs = stride[-1], rs = stride[-2]; all operands contiguous.
        unsafe {
            gemm(
                /* m: usize = */ n,
                /* n: usize = */ n,
                /* k: usize = */ n,
                /* dst: *mut T = */ out.as_mut_ptr(),
                /* dst_cs: isize = */ 1,
                /* dst_rs: isize = */ n as isize,
                /* read_dst: bool = */ false,
                /* lhs: *const T = */ lhs.as_ptr(),
                /* lhs_cs: isize = */ 1,
                /* lhs_rs: isize = */ n as isize,
                /* rhs: *const T = */ rhs.as_ptr(),
                /* rhs_cs: isize = */ 1,
                /* rhs_rs: isize = */ n as isize,
                /* alpha: T = */ 0.0,
                /* beta: T = */ 1.0,
                /* conj_dst: bool = */ false,
                /* conj_lhs: bool = */ false,
                /* conj_rhs: bool = */ false,
                parallelism,
            )
        }

        Ok(Matrix::from_raw(n, out))
    }
}
