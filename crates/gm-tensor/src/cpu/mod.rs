pub mod matmul;

use log::debug;

use crate::backend::ComputeBackend;
use crate::error::{Result, TensorError};

/// The golden CPU backend.
///
/// A straight triple loop over [`matmul::matmul_ref_into`], written for
/// auditability rather than speed. Other backends are validated against it.
#[derive(Debug, Clone)]
pub struct ReferenceBackend;

impl ReferenceBackend {
    pub fn new() -> Self {
        ReferenceBackend
    }
}

impl Default for ReferenceBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks slice lengths against `[m, k] @ [k, n] -> [m, n]`.
pub(crate) fn check_lengths(
    a: usize,
    b: usize,
    c: usize,
    m: usize,
    n: usize,
    k: usize,
) -> Result<()> {
    for (operand, got, expected) in [("a", a, m * k), ("b", b, k * n), ("c", c, m * n)] {
        if got != expected {
            return Err(TensorError::LengthMismatch {
                operand,
                expected,
                got,
            });
        }
    }
    Ok(())
}

impl ComputeBackend for ReferenceBackend {
    fn name(&self) -> &str {
        "reference"
    }

    fn matmul_i8(
        &self,
        a: &[i8],
        b: &[i8],
        c: &mut [i32],
        m: usize,
        n: usize,
        k: usize,
    ) -> Result<()> {
        check_lengths(a.len(), b.len(), c.len(), m, n, k)?;
        if k > matmul::MAX_EXACT_K {
            debug!(
                "reference matmul: k={} exceeds exact accumulator range ({})",
                k,
                matmul::MAX_EXACT_K
            );
        }
        matmul::matmul_ref_into(a, b, c, m, n, k);
        Ok(())
    }
}
