use std::fmt::Debug;

use crate::error::Result;

/// Trait for pluggable integer matmul backends.
///
/// [`ReferenceBackend`](crate::cpu::ReferenceBackend) is the golden model;
/// optimized or simulated counterparts implement this trait so they can be
/// checked against it with [`verify_backend`](crate::verify::verify_backend).
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "reference").
    fn name(&self) -> &str;

    /// Integer matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major i8 data of shape [m, k]
    /// - `b`: row-major i8 data of shape [k, n]
    /// - `c`: row-major i32 output of shape [m, n], fully overwritten
    ///
    /// Returns an error if a slice length does not match its dimensions.
    fn matmul_i8(
        &self,
        a: &[i8],
        b: &[i8],
        c: &mut [i32],
        m: usize,
        n: usize,
        k: usize,
    ) -> Result<()>;
}
