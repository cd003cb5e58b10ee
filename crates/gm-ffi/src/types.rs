/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GMStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorShapeMismatch = 2,
    ErrorMismatch = 3,
    ErrorInternal = 4,
}

/// Summary of a golden comparison, filled in by `gm_verify`.
///
/// `first_*` describe the first differing cell in row-major order; when the
/// candidate is exact the coordinates are -1 and the values 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GMVerifyReport {
    pub checked: u64,
    pub mismatch_count: u64,
    pub first_row: i64,
    pub first_col: i64,
    pub first_expected: i32,
    pub first_got: i32,
}

impl Default for GMVerifyReport {
    fn default() -> Self {
        Self {
            checked: 0,
            mismatch_count: 0,
            first_row: -1,
            first_col: -1,
            first_expected: 0,
            first_got: 0,
        }
    }
}

impl From<&gm_tensor::VerifyReport> for GMVerifyReport {
    fn from(report: &gm_tensor::VerifyReport) -> Self {
        let mut out = GMVerifyReport {
            checked: report.checked as u64,
            mismatch_count: report.mismatch_count as u64,
            ..Default::default()
        };
        if let Some(first) = report.first_mismatch() {
            out.first_row = first.row as i64;
            out.first_col = first.col as i64;
            out.first_expected = first.expected;
            out.first_got = first.got;
        }
        out
    }
}
