//! The kernel abstraction and its concrete variants.
//!
//! Every variant implements one capability: multiply two equally sized
//! square matrices. The execution-model tag records whether the work
//! completes on the calling thread or is dispatched to a device; either
//! way `multiply` returns only once the result is materialized in host
//! memory and any per-call device resources have been released, so the
//! runner can bracket the call with two clock readings regardless of
//! backend.

mod gemm;
mod naive;
mod rayon;
mod wgpu;

pub use self::gemm::GemmKernel;
pub use self::naive::NaiveKernel;
pub use self::rayon::RayonKernel;
pub use self::wgpu::WgpuKernel;

use crate::{Error, Matrix, Result};

/// Untimed invocations performed before measuring a kernel that declares
/// a warm-up requirement, forcing lazy backend initialization (device
/// context creation, pipeline compilation) out of the measured region.
pub const WARMUP_ITERATIONS: usize = 10;

/// How a kernel's multiply completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionModel {
    /// Completes on the calling thread.
    Synchronous,
    /// Dispatched to a device; the call blocks internally until readback
    /// finishes and device buffers are released.
    DeviceDispatched,
}

/// One pluggable matrix-multiplication implementation under comparison.
pub trait Kernel {
    /// Unique display name, used as the report key.
    fn name(&self) -> &str;

    fn execution_model(&self) -> ExecutionModel;

    /// Number of untimed warm-up invocations this kernel requires before
    /// measurement. Zero means no warm-up requirement.
    fn warmup_iters(&self) -> usize {
        0
    }

    /// One-time backend selection. Called by the runner before any
    /// warm-up or timed repetition; the default is a no-op for kernels
    /// with nothing to initialize.
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Compute `a * b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}

/// Shared operand validation for kernels called outside the runner.
pub(crate) fn check_operands(a: &Matrix, b: &Matrix) -> Result<usize> {
    if a.size() != b.size() {
        return Err(Error::InvalidInput {
            reason: format!(
                "operand sizes differ: {} vs {}",
                a.size(),
                b.size()
            ),
        });
    }
    Ok(a.size())
}
