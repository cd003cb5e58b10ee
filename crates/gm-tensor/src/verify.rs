//! Exact-output comparison of candidate results against the reference kernel.

use log::{debug, warn};

use crate::backend::ComputeBackend;
use crate::cpu::matmul::matmul_ref_into;
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::matrix::Matrix;
use crate::shape::Shape;

/// Options controlling a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Upper bound on mismatches kept in [`VerifyReport::mismatches`].
    /// The total is always counted.
    pub max_reported: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self { max_reported: 16 }
    }
}

/// One cell where the candidate disagrees with the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub row: usize,
    pub col: usize,
    pub expected: i32,
    pub got: i32,
}

/// Outcome of comparing a candidate against the reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerifyReport {
    /// Number of cells compared (`m * n`).
    pub checked: usize,
    /// Total number of differing cells.
    pub mismatch_count: usize,
    /// The first differing cells in row-major order, capped by
    /// [`VerifyOptions::max_reported`].
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    /// True when every cell matched bit for bit.
    pub fn is_exact(&self) -> bool {
        self.mismatch_count == 0
    }

    pub fn first_mismatch(&self) -> Option<&Mismatch> {
        self.mismatches.first()
    }
}

/// Compares flat row-major buffers: `candidate` against `a @ b`.
///
/// # Errors
/// Returns a length mismatch if any buffer disagrees with its dimensions.
pub fn verify_slices(
    a: &[i8],
    b: &[i8],
    candidate: &[i32],
    m: usize,
    n: usize,
    k: usize,
    opts: &VerifyOptions,
) -> Result<VerifyReport> {
    crate::cpu::check_lengths(a.len(), b.len(), candidate.len(), m, n, k)?;

    let mut expected = vec![0i32; m * n];
    matmul_ref_into(a, b, &mut expected, m, n, k);

    let mut report = VerifyReport {
        checked: m * n,
        ..Default::default()
    };
    for (idx, (&want, &got)) in expected.iter().zip(candidate).enumerate() {
        if want == got {
            continue;
        }
        report.mismatch_count += 1;
        if report.mismatches.len() < opts.max_reported {
            report.mismatches.push(Mismatch {
                row: idx / n,
                col: idx % n,
                expected: want,
                got,
            });
        }
    }

    if report.is_exact() {
        debug!("verify [{}x{}x{}]: {} cells exact", m, n, k, report.checked);
    } else {
        warn!(
            "verify [{}x{}x{}]: {} of {} cells differ from reference",
            m, n, k, report.mismatch_count, report.checked
        );
    }
    Ok(report)
}

/// Compares a candidate i32 matrix against the reference product `a @ b`.
pub fn verify_output(
    a: &Matrix,
    b: &Matrix,
    candidate: &Matrix,
    opts: &VerifyOptions,
) -> Result<VerifyReport> {
    let out_shape = Shape::matmul_shape(&a.shape(), &b.shape())?;
    if candidate.shape() != out_shape {
        return Err(TensorError::ShapeMismatch {
            expected: out_shape.dims().to_vec(),
            got: candidate.shape().dims().to_vec(),
        });
    }
    verify_slices(
        a.data_i8()?,
        b.data_i8()?,
        candidate.data_i32()?,
        out_shape.rows(),
        out_shape.cols(),
        a.cols(),
        opts,
    )
}

/// Runs `candidate` on `a @ b` and compares its output with the reference.
pub fn verify_backend(
    candidate: &dyn ComputeBackend,
    a: &Matrix,
    b: &Matrix,
    opts: &VerifyOptions,
) -> Result<VerifyReport> {
    debug!("verifying backend '{}'", candidate.name());
    let out_shape = Shape::matmul_shape(&a.shape(), &b.shape())?;
    let mut out = Matrix::zeros(DType::I32, out_shape);
    a.matmul_into(b, &mut out, candidate)?;
    verify_output(a, b, &out, opts)
}
