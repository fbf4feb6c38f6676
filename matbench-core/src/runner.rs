use std::time::Duration;

use tracing::{debug, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::kernel::Kernel;
use crate::registry::KernelRegistry;
use crate::{Error, Matrix, Result};

/// Measured outcome for one kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelReport {
    /// The kernel's display name.
    pub name: String,
    /// Average latency over successful repetitions, in milliseconds,
    /// rounded to 4 decimal places. 0.0 when no repetition succeeded.
    pub average_ms: f64,
    /// Number of repetitions that completed and contribute to the
    /// average.
    pub samples: usize,
    /// Number of repetitions (or the whole run, when backend selection
    /// failed) that errored and were excluded from the average.
    pub failures: usize,
}

/// Result of one comparison run: one entry per registered kernel, in
/// registry order. Produced atomically when the run completes.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    entries: Vec<KernelReport>,
}

impl BenchmarkReport {
    pub fn entries(&self) -> &[KernelReport] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&KernelReport> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn average_ms(&self, name: &str) -> Option<f64> {
        self.get(name).map(|e| e.average_ms)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The presenter view: `(name, latency)` pairs with the latency
    /// formatted to exactly 4 decimal places.
    pub fn formatted(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), format!("{:.4}", e.average_ms)))
            .collect()
    }
}

/// Runs every registered kernel against one pair of operands and
/// aggregates per-kernel average latency.
///
/// Kernels are measured strictly one after another; nothing about two
/// kernels ever overlaps in wall-clock time, so each measurement
/// attributes CPU and device contention to a single kernel. The clock
/// is injected so tests can drive the timing deterministically.
pub struct BenchmarkRunner<C: Clock = MonotonicClock> {
    clock: C,
}

impl BenchmarkRunner<MonotonicClock> {
    pub fn new() -> Self {
        Self {
            clock: MonotonicClock::new(),
        }
    }
}

impl Default for BenchmarkRunner<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BenchmarkRunner<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Benchmark every kernel in `registry` against `a * b`.
    ///
    /// Input validation happens before any timing: `repetitions` must be
    /// at least 1 and the operands must share a side length (a `Matrix`
    /// is square and non-empty by construction, so those cases cannot
    /// reach the runner). Individual kernel failures never abort the
    /// run; they are logged, counted, and excluded from that kernel's
    /// average, with an average of 0.0 as the sentinel when a kernel
    /// never succeeds.
    pub fn run(
        &self,
        registry: &KernelRegistry,
        a: &Matrix,
        b: &Matrix,
        repetitions: usize,
    ) -> Result<BenchmarkReport> {
        if repetitions == 0 {
            return Err(Error::InvalidRepetitions { got: repetitions });
        }
        if a.size() != b.size() {
            return Err(Error::InvalidInput {
                reason: format!(
                    "operand sizes differ: {} vs {}",
                    a.size(),
                    b.size()
                ),
            });
        }

        let mut entries = Vec::with_capacity(registry.len());
        for kernel in registry.kernels() {
            entries.push(self.benchmark_kernel(kernel, a, b, repetitions));
        }
        Ok(BenchmarkReport { entries })
    }

    fn benchmark_kernel(
        &self,
        kernel: &dyn Kernel,
        a: &Matrix,
        b: &Matrix,
        repetitions: usize,
    ) -> KernelReport {
        let name = kernel.name().to_string();

        // Backend selection must finish before any timed repetition. A
        // kernel whose backend cannot come up still gets a report entry
        // so the comparison covers the full registry.
        if let Err(err) = kernel.prepare() {
            warn!(kernel = %name, error = %err, "backend selection failed");
            return KernelReport {
                name,
                average_ms: 0.0,
                samples: 0,
                failures: repetitions,
            };
        }

        let warmup = kernel.warmup_iters();
        if warmup > 0 {
            debug!(kernel = %name, iterations = warmup, "warming up");
        }
        for i in 0..warmup {
            if let Err(err) = kernel.multiply(a, b) {
                debug!(kernel = %name, iteration = i, error = %err, "warm-up invocation failed");
            }
        }

        let mut accumulated = Duration::ZERO;
        let mut samples = 0usize;
        let mut failures = 0usize;
        for _ in 0..repetitions {
            let start = self.clock.now();
            let outcome = kernel.multiply(a, b);
            let end = self.clock.now();
            match outcome {
                Ok(_) => {
                    accumulated += end - start;
                    samples += 1;
                }
                Err(err) => {
                    failures += 1;
                    warn!(kernel = %name, error = %err, "repetition failed, excluding sample");
                }
            }
        }

        let average_ms = if samples == 0 {
            0.0
        } else {
            round4(accumulated.as_secs_f64() * 1e3 / samples as f64)
        };
        KernelReport {
            name,
            average_ms,
            samples,
            failures,
        }
    }
}

fn round4(ms: f64) -> f64 {
    (ms * 10_000.0).round() / 10_000.0
}
