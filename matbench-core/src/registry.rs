use crate::kernel::{GemmKernel, Kernel, NaiveKernel, RayonKernel, WgpuKernel};
use crate::{Error, Result};

/// Ordered collection of named kernels under comparison.
///
/// Built once before a run and not mutated during it; iteration order
/// defines both execution order and report order. Display names are
/// unique, enforced at registration.
pub struct KernelRegistry {
    kernels: Vec<Box<dyn Kernel>>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self {
            kernels: Vec::new(),
        }
    }

    /// The default lineup: naive loop, gemm, rayon, wgpu.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let kernels: Vec<Box<dyn Kernel>> = vec![
            Box::new(NaiveKernel),
            Box::new(GemmKernel),
            Box::new(RayonKernel),
            Box::new(WgpuKernel::new()),
        ];
        for kernel in kernels {
            registry
                .register(kernel)
                .expect("standard kernel names are distinct");
        }
        registry
    }

    pub fn register(&mut self, kernel: Box<dyn Kernel>) -> Result<()> {
        if self.kernels.iter().any(|k| k.name() == kernel.name()) {
            return Err(Error::DuplicateKernel {
                name: kernel.name().to_string(),
            });
        }
        self.kernels.push(kernel);
        Ok(())
    }

    pub fn kernels(&self) -> impl Iterator<Item = &dyn Kernel> {
        self.kernels.iter().map(|k| &**k)
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
