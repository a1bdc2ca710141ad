use crate::core::data::complex::Complex;
use std::error::Error;

/// Port for the per-point escape computation.
///
/// `escape_time` must be a pure function of `c`: deterministic, no side
/// effects, so the iteration count for a pixel is invariant to which tile or
/// worker computed it. `Failure` exists for the defensive worker-fault
/// contract; real kernels are typically infallible.
pub trait EscapeKernel {
    type Failure: Error;

    fn escape_time(&self, c: Complex) -> Result<u32, Self::Failure>;
}
