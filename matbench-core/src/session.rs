use crate::clock::{Clock, MonotonicClock};
use crate::matrix::MatrixGenerator;
use crate::registry::KernelRegistry;
use crate::runner::{BenchmarkReport, BenchmarkRunner};
use crate::{Error, Matrix, Result};

const DEFAULT_REPETITIONS: usize = 100;

/// Drives comparison runs for an embedding frontend.
///
/// Operands are generated once per size change and reused across every
/// kernel and repetition of subsequent runs, so all kernels multiply the
/// same inputs. The last report is replaced, never merged, on the next
/// run; changing the size invalidates it.
pub struct ComparisonSession<C: Clock = MonotonicClock> {
    registry: KernelRegistry,
    runner: BenchmarkRunner<C>,
    generator: MatrixGenerator,
    operands: Option<(Matrix, Matrix)>,
    repetitions: usize,
    report: Option<BenchmarkReport>,
    in_progress: bool,
}

impl ComparisonSession<MonotonicClock> {
    pub fn new(registry: KernelRegistry) -> Self {
        Self::with_parts(registry, BenchmarkRunner::new(), MatrixGenerator::new())
    }
}

impl<C: Clock> ComparisonSession<C> {
    pub fn with_parts(
        registry: KernelRegistry,
        runner: BenchmarkRunner<C>,
        generator: MatrixGenerator,
    ) -> Self {
        Self {
            registry,
            runner,
            generator,
            operands: None,
            repetitions: DEFAULT_REPETITIONS,
            report: None,
            in_progress: false,
        }
    }

    /// Regenerate both operands for a new size and invalidate the
    /// previous report. On an invalid size nothing is touched: prior
    /// operands and report stay visible.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        let a = self.generator.generate(size)?;
        let b = self.generator.generate(size)?;
        self.operands = Some((a, b));
        self.report = None;
        Ok(())
    }

    /// Configure the repetition count for the next run. The prior value
    /// is kept when the new one is invalid.
    pub fn set_repetitions(&mut self, repetitions: usize) -> Result<()> {
        if repetitions == 0 {
            return Err(Error::InvalidRepetitions { got: repetitions });
        }
        self.repetitions = repetitions;
        Ok(())
    }

    /// Run the full comparison against the current operands.
    ///
    /// The busy flag is raised for the duration of the run and cleared
    /// on both success and failure.
    pub fn run_comparison(&mut self) -> Result<&BenchmarkReport> {
        let (a, b) = self.operands.as_ref().ok_or_else(|| Error::InvalidInput {
            reason: "matrix size has not been set".to_string(),
        })?;

        self.in_progress = true;
        let outcome = self.runner.run(&self.registry, a, b, self.repetitions);
        self.in_progress = false;

        Ok(self.report.insert(outcome?))
    }

    /// Busy indicator for the presenter.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// The last completed report, if any.
    pub fn report(&self) -> Option<&BenchmarkReport> {
        self.report.as_ref()
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn registry(&self) -> &KernelRegistry {
        &self.registry
    }
}
