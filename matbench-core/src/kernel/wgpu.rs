use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::OnceLock;

use cubecl::{cube, prelude::*, wgpu::WgpuRuntime};

use super::{check_operands, ExecutionModel, Kernel};
use crate::{Error, Matrix, Result};

type RT = WgpuRuntime;
type Client = ComputeClient<<RT as Runtime>::Server, <RT as Runtime>::Channel>;

const CUBE_DIM: u32 = 64;

#[cube(launch_unchecked)]
fn matmul_flat<F: Float>(lhs: &Array<F>, rhs: &Array<F>, out: &mut Array<F>, size: u32) {
    if ABSOLUTE_POS < size * size {
        let row = ABSOLUTE_POS / size;
        let col = ABSOLUTE_POS % size;
        let mut sum = F::new(0.0);
        for k in 0..size {
            sum += lhs[row * size + k] * rhs[k * size + col];
        }
        out[ABSOLUTE_POS] = sum;
    }
}

/// Accelerator-backed kernel dispatching a cubecl compute shader on the
/// wgpu runtime.
///
/// Backend selection happens once in [`prepare`](Kernel::prepare); the
/// first pipeline compilation is absorbed by the declared warm-up
/// iterations. Each call uploads both operands, dispatches, and blocks
/// on readback; the device buffers are dropped before the call returns,
/// so their release cost is part of the timed span.
///
/// The device computes in `f32` (wgpu has no `f64`). Generated inputs
/// are integers below 100, keeping every partial sum exactly
/// representable for the sizes under comparison.
pub struct WgpuKernel {
    client: OnceLock<Option<Client>>,
}

impl WgpuKernel {
    pub fn new() -> Self {
        Self {
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> Result<&Client> {
        self.client
            .get()
            .and_then(Option::as_ref)
            .ok_or_else(|| Error::BackendUnavailable {
                reason: "wgpu backend has not been prepared".to_string(),
            })
    }
}

impl Default for WgpuKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for WgpuKernel {
    fn name(&self) -> &str {
        "wgpu"
    }

    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::DeviceDispatched
    }

    fn warmup_iters(&self) -> usize {
        super::WARMUP_ITERATIONS
    }

    fn prepare(&self) -> Result<()> {
        let client = self.client.get_or_init(|| {
            // Adapter resolution panics inside wgpu when no device
            // exists; degrade that into BackendUnavailable.
            catch_unwind(AssertUnwindSafe(|| {
                RT::client(&cubecl::wgpu::WgpuDevice::DefaultDevice)
            }))
            .ok()
        });
        match client {
            Some(_) => Ok(()),
            None => Err(Error::BackendUnavailable {
                reason: "no wgpu adapter could be initialized".to_string(),
            }),
        }
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_operands(a, b)?;
        let client = self.client()?;

        let lhs: Vec<f32> = a.as_slice().iter().map(|&v| v as f32).collect();
        let rhs: Vec<f32> = b.as_slice().iter().map(|&v| v as f32).collect();
        let elems = n * n;

        let lhs_handle = client.create(f32::as_bytes(&lhs));
        let rhs_handle = client.create(f32::as_bytes(&rhs));
        let out_handle = client.empty(elems * core::mem::size_of::<f32>());

        unsafe {
            matmul_flat::launch_unchecked::<f32, RT>(
                client,
                CubeCount::Static((elems as u32).div_ceil(CUBE_DIM), 1, 1),
                CubeDim::new(CUBE_DIM, 1, 1),
                ArrayArg::from_raw_parts::<f32>(&lhs_handle, elems, 1),
                ArrayArg::from_raw_parts::<f32>(&rhs_handle, elems, 1),
                ArrayArg::from_raw_parts::<f32>(&out_handle, elems, 1),
                ScalarArg::new(n as u32),
            )
        };

        // Blocks until the dispatch completes and the result is host
        // addressable. The operand handles drop on return, so device
        // buffer release stays inside the timed span.
        let bytes = client.read_one(out_handle.binding());
        let out = f32::from_bytes(&bytes);
        Ok(Matrix::from_raw(
            n,
            out.iter().map(|&v| f64::from(v)).collect(),
        ))
    }
}
