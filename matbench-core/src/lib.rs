//! Benchmark harness comparing independent implementations of dense
//! square matrix multiplication on identically generated input.
//!
//! Each implementation is a [`Kernel`]: the naive triple loop, a
//! `gemm`-backed CPU kernel, a rayon row-parallel kernel, and a
//! cubecl/wgpu accelerator kernel. The [`BenchmarkRunner`] measures
//! them strictly one after another against the same operand pair,
//! handling warm-up for kernels with lazy backend initialization, and
//! reports per-kernel average latency in milliseconds.
//!
//! ```no_run
//! use matbench_core::{ComparisonSession, KernelRegistry};
//!
//! let mut session = ComparisonSession::new(KernelRegistry::standard());
//! session.set_size(128)?;
//! session.set_repetitions(20)?;
//! let report = session.run_comparison()?;
//! for (name, latency) in report.formatted() {
//!     println!("{name}: {latency} ms");
//! }
//! # Ok::<(), matbench_core::Error>(())
//! ```

mod clock;
mod error;
mod kernel;
mod matrix;
mod registry;
mod runner;
mod session;

pub use clock::{Clock, MonotonicClock};
pub use error::{Error, Result};
pub use kernel::{
    ExecutionModel, GemmKernel, Kernel, NaiveKernel, RayonKernel, WgpuKernel,
    WARMUP_ITERATIONS,
};
pub use matrix::{Matrix, MatrixGenerator};
pub use registry::KernelRegistry;
pub use runner::{BenchmarkReport, BenchmarkRunner, KernelReport};
pub use session::ComparisonSession;
