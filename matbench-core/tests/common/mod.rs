//! Mock kernels and a deterministic clock shared by the harness tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use matbench_core::{Clock, Error, ExecutionModel, Kernel, Matrix, Result};

/// Clock that advances by a fixed step on every reading, so each timed
/// repetition (two readings) measures exactly `step_ms`.
pub struct FakeClock {
    now_ms: Cell<u64>,
    step_ms: u64,
}

impl FakeClock {
    pub fn with_step_ms(step_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(0),
            step_ms,
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        let t = self.now_ms.get();
        self.now_ms.set(t + self.step_ms);
        Duration::from_millis(t)
    }
}

/// Kernel that echoes its left operand and counts multiply invocations,
/// optionally appending its name to a shared event log.
pub struct CountingKernel {
    name: String,
    warmup: usize,
    calls: Arc<AtomicUsize>,
    log: Option<Arc<Mutex<Vec<String>>>>,
}

impl CountingKernel {
    pub fn new(name: &str, warmup: usize) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                name: name.to_string(),
                warmup,
                calls: calls.clone(),
                log: None,
            },
            calls,
        )
    }

    pub fn with_log(name: &str, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            warmup: 0,
            calls: Arc::new(AtomicUsize::new(0)),
            log: Some(log),
        }
    }
}

impl Kernel for CountingKernel {
    fn name(&self) -> &str {
        &self.name
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::Synchronous
    }

    fn warmup_iters(&self) -> usize {
        self.warmup
    }

    fn multiply(&self, a: &Matrix, _b: &Matrix) -> Result<Matrix> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().unwrap().push(self.name.clone());
        }
        Ok(a.clone())
    }
}

/// Kernel whose multiply always fails.
pub struct FailingKernel;

impl Kernel for FailingKernel {
    fn name(&self) -> &str {
        "failing"
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::Synchronous
    }

    fn multiply(&self, _a: &Matrix, _b: &Matrix) -> Result<Matrix> {
        Err(Error::KernelFailure {
            kernel: "failing".to_string(),
            reason: "configured to fail".to_string(),
        })
    }
}

/// Kernel that fails every second invocation.
pub struct FlakyKernel {
    calls: AtomicUsize,
}

impl FlakyKernel {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl Kernel for FlakyKernel {
    fn name(&self) -> &str {
        "flaky"
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::Synchronous
    }

    fn multiply(&self, a: &Matrix, _b: &Matrix) -> Result<Matrix> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call % 2 == 1 {
            Err(Error::KernelFailure {
                kernel: "flaky".to_string(),
                reason: format!("failing call {call}"),
            })
        } else {
            Ok(a.clone())
        }
    }
}

/// Kernel whose backend selection never comes up.
pub struct UnavailableKernel;

impl Kernel for UnavailableKernel {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::DeviceDispatched
    }

    fn prepare(&self) -> Result<()> {
        Err(Error::BackendUnavailable {
            reason: "no device".to_string(),
        })
    }

    fn multiply(&self, _a: &Matrix, _b: &Matrix) -> Result<Matrix> {
        unreachable!("multiply must not be called when prepare fails")
    }
}
