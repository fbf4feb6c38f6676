use thiserror::Error;

/// Errors surfaced by matrix generation, kernel execution, and the
/// benchmark harness.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested matrix side length is not a positive integer.
    #[error("matrix size must be a positive integer, got {size}")]
    InvalidSize { size: usize },

    /// The requested repetition count is not a positive integer.
    #[error("repetitions must be a positive integer, got {got}")]
    InvalidRepetitions { got: usize },

    /// The input matrices are malformed or incompatible.
    #[error("invalid input matrices: {reason}")]
    InvalidInput { reason: String },

    /// A kernel with the same display name is already registered.
    #[error("kernel `{name}` is already registered")]
    DuplicateKernel { name: String },

    /// The accelerator backend could not be selected or initialized.
    #[error("accelerator backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    /// An individual kernel's multiply call failed.
    #[error("kernel `{kernel}` failed: {reason}")]
    KernelFailure { kernel: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
