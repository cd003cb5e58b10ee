//! C ABI for the golden matmul, shaped like the C reference
//! `matmul_ref(int8_t* A, int8_t* B, int32_t* C, int M, int N, int K)` so
//! simulation testbenches can link it directly.
//!
//! Unlike the C reference, every entry point validates its arguments and
//! reports a `GMStatus` instead of touching memory it was not given.

mod error;
mod types;

pub use error::*;
pub use types::*;

use std::ffi::CString;
use std::os::raw::c_char;

use gm_tensor::{ComputeBackend, ReferenceBackend, VerifyOptions, MAX_EXACT_K};
use log::debug;

/// Execute a closure that returns a `GMStatus`, catching any panics
/// and converting them into `GMStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> GMStatus + std::panic::UnwindSafe>(f: F) -> GMStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => {
            set_last_error("internal panic".to_string());
            GMStatus::ErrorInternal
        }
    }
}

/// Dimensions converted from C ints, with element counts for each buffer.
struct Dims {
    m: usize,
    n: usize,
    k: usize,
}

impl Dims {
    fn from_c(m: i32, n: i32, k: i32) -> Result<Self, String> {
        if m < 0 || n < 0 || k < 0 {
            return Err(format!("negative dimension: M={} N={} K={}", m, n, k));
        }
        let dims = Dims {
            m: m as usize,
            n: n as usize,
            k: k as usize,
        };
        for (name, rows, cols) in [("A", dims.m, dims.k), ("B", dims.k, dims.n), ("C", dims.m, dims.n)] {
            if rows.checked_mul(cols).is_none() {
                return Err(format!("{} extent {}x{} overflows", name, rows, cols));
            }
        }
        Ok(dims)
    }
}

/// Borrow `len` elements at `ptr`. A null pointer is only accepted for an
/// empty extent.
///
/// # Safety
/// A non-null `ptr` must be valid for reads of `len` elements for `'a`.
unsafe fn borrow<'a, T>(ptr: *const T, len: usize, name: &str) -> Result<&'a [T], String> {
    if len == 0 {
        return Ok(Default::default());
    }
    if ptr.is_null() {
        return Err(format!("{} is null", name));
    }
    Ok(std::slice::from_raw_parts(ptr, len))
}

/// Mutable counterpart of [`borrow`].
///
/// # Safety
/// A non-null `ptr` must be valid for writes of `len` elements for `'a`
/// and must not alias the input buffers.
unsafe fn borrow_mut<'a, T>(ptr: *mut T, len: usize, name: &str) -> Result<&'a mut [T], String> {
    if len == 0 {
        return Ok(Default::default());
    }
    if ptr.is_null() {
        return Err(format!("{} is null", name));
    }
    Ok(std::slice::from_raw_parts_mut(ptr, len))
}

macro_rules! try_arg {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(msg) => {
                set_last_error(msg);
                return GMStatus::ErrorInvalidArgument;
            }
        }
    };
}

/// Compute `C = A @ B` with the reference kernel.
///
/// `a` is row-major [m, k], `b` is [k, n], `c` is [m, n] and is fully
/// overwritten. Pointers may be null only when their extent is empty.
///
/// # Safety
/// Each non-null pointer must address at least as many elements as its
/// extent, and `c` must not overlap `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn gm_matmul_ref(
    a: *const i8,
    b: *const i8,
    c: *mut i32,
    m: i32,
    n: i32,
    k: i32,
) -> GMStatus {
    catch_panic(|| {
        let dims = try_arg!(Dims::from_c(m, n, k));
        debug!("gm_matmul_ref M={} N={} K={}", dims.m, dims.n, dims.k);

        let a = try_arg!(unsafe { borrow(a, dims.m * dims.k, "A") });
        let b = try_arg!(unsafe { borrow(b, dims.k * dims.n, "B") });
        let c = try_arg!(unsafe { borrow_mut(c, dims.m * dims.n, "C") });

        match ReferenceBackend::new().matmul_i8(a, b, c, dims.m, dims.n, dims.k) {
            Ok(()) => GMStatus::Ok,
            Err(e) => status_for(e),
        }
    })
}

/// Compare a candidate `[m, n]` result against the golden `A @ B`.
///
/// Fills `*report_out` and returns `GMStatus::Ok` when every cell matches,
/// `GMStatus::ErrorMismatch` otherwise.
///
/// # Safety
/// Same pointer requirements as `gm_matmul_ref`; `report_out` must be a
/// valid, writable `GMVerifyReport`.
#[no_mangle]
pub unsafe extern "C" fn gm_verify(
    a: *const i8,
    b: *const i8,
    candidate: *const i32,
    m: i32,
    n: i32,
    k: i32,
    report_out: *mut GMVerifyReport,
) -> GMStatus {
    catch_panic(|| {
        if report_out.is_null() {
            set_last_error("report_out is null".to_string());
            return GMStatus::ErrorInvalidArgument;
        }
        let dims = try_arg!(Dims::from_c(m, n, k));
        debug!("gm_verify M={} N={} K={}", dims.m, dims.n, dims.k);

        let a = try_arg!(unsafe { borrow(a, dims.m * dims.k, "A") });
        let b = try_arg!(unsafe { borrow(b, dims.k * dims.n, "B") });
        let candidate = try_arg!(unsafe { borrow(candidate, dims.m * dims.n, "candidate") });

        let opts = VerifyOptions { max_reported: 1 };
        let report =
            match gm_tensor::verify_slices(a, b, candidate, dims.m, dims.n, dims.k, &opts) {
                Ok(r) => r,
                Err(e) => return status_for(e),
            };

        unsafe {
            *report_out = GMVerifyReport::from(&report);
        }
        if report.is_exact() {
            GMStatus::Ok
        } else {
            set_last_error(format!(
                "{} of {} cells differ from reference",
                report.mismatch_count, report.checked
            ));
            GMStatus::ErrorMismatch
        }
    })
}

/// Largest K for which the i32 accumulator is exact for all i8 inputs.
#[no_mangle]
pub extern "C" fn gm_max_exact_k() -> i32 {
    MAX_EXACT_K as i32
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error, or
/// null if no error has occurred. The caller must free the returned string
/// with `gm_free_string`.
#[no_mangle]
pub extern "C" fn gm_last_error() -> *const c_char {
    match error::take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null(),
    }
}

/// Free a string previously returned by `gm_last_error`.
#[no_mangle]
pub unsafe extern "C" fn gm_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
