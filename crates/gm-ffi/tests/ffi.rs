use std::ffi::CStr;
use std::ptr;

use gm_ffi::{
    gm_free_string, gm_last_error, gm_matmul_ref, gm_max_exact_k, gm_verify, GMStatus,
    GMVerifyReport,
};

fn last_error() -> Option<String> {
    let p = gm_last_error();
    if p.is_null() {
        return None;
    }
    let msg = unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned();
    unsafe { gm_free_string(p as *mut _) };
    Some(msg)
}

#[test]
fn matmul_2x2() {
    let a: [i8; 4] = [1, 2, 3, 4];
    let b: [i8; 4] = [5, 6, 7, 8];
    let mut c = [0i32; 4];

    let status = unsafe { gm_matmul_ref(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 2, 2, 2) };
    assert_eq!(status, GMStatus::Ok);
    assert_eq!(c, [19, 22, 43, 50]);
}

#[test]
fn matmul_overwrites_and_handles_k_zero() {
    let mut c = [7i32; 6];
    let status = unsafe { gm_matmul_ref(ptr::null(), ptr::null(), c.as_mut_ptr(), 2, 3, 0) };
    assert_eq!(status, GMStatus::Ok);
    assert_eq!(c, [0; 6]);
}

#[test]
fn matmul_empty_output_accepts_null() {
    let b: [i8; 2] = [1, 2];
    let status = unsafe { gm_matmul_ref(ptr::null(), b.as_ptr(), ptr::null_mut(), 0, 2, 1) };
    assert_eq!(status, GMStatus::Ok);
}

#[test]
fn matmul_rejects_negative_dimension() {
    let a: [i8; 1] = [1];
    let b: [i8; 1] = [1];
    let mut c = [0i32; 1];
    let status = unsafe { gm_matmul_ref(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), -1, 1, 1) };
    assert_eq!(status, GMStatus::ErrorInvalidArgument);
    assert!(last_error().unwrap().contains("negative dimension"));
}

#[test]
fn matmul_rejects_null_with_extent() {
    let b: [i8; 2] = [1, 2];
    let mut c = [0i32; 2];
    let status = unsafe { gm_matmul_ref(ptr::null(), b.as_ptr(), c.as_mut_ptr(), 1, 2, 1) };
    assert_eq!(status, GMStatus::ErrorInvalidArgument);
    assert_eq!(last_error().as_deref(), Some("A is null"));
}

#[test]
fn verify_exact_candidate() {
    let a: [i8; 2] = [-1, 2];
    let b: [i8; 2] = [3, -4];
    let candidate = [-11i32];
    let mut report = GMVerifyReport::default();

    let status = unsafe {
        gm_verify(a.as_ptr(), b.as_ptr(), candidate.as_ptr(), 1, 1, 2, &mut report)
    };
    assert_eq!(status, GMStatus::Ok);
    assert_eq!(report.checked, 1);
    assert_eq!(report.mismatch_count, 0);
    assert_eq!(report.first_row, -1);
    assert_eq!(report.first_col, -1);
}

#[test]
fn verify_reports_first_mismatch() {
    let a: [i8; 4] = [1, 2, 3, 4];
    let b: [i8; 4] = [5, 6, 7, 8];
    let candidate = [19i32, 22, 43, 51];
    let mut report = GMVerifyReport::default();

    let status = unsafe {
        gm_verify(a.as_ptr(), b.as_ptr(), candidate.as_ptr(), 2, 2, 2, &mut report)
    };
    assert_eq!(status, GMStatus::ErrorMismatch);
    assert_eq!(report.checked, 4);
    assert_eq!(report.mismatch_count, 1);
    assert_eq!((report.first_row, report.first_col), (1, 1));
    assert_eq!(report.first_expected, 50);
    assert_eq!(report.first_got, 51);
    assert_eq!(
        last_error().as_deref(),
        Some("1 of 4 cells differ from reference")
    );
}

#[test]
fn verify_requires_report_pointer() {
    let status = unsafe {
        gm_verify(ptr::null(), ptr::null(), ptr::null(), 0, 0, 0, ptr::null_mut())
    };
    assert_eq!(status, GMStatus::ErrorInvalidArgument);
}

#[test]
fn exact_k_limit() {
    assert_eq!(gm_max_exact_k(), 131_071);
}

#[test]
fn no_error_pending_after_success() {
    let _ = last_error();
    let a: [i8; 1] = [3];
    let b: [i8; 1] = [4];
    let mut c = [0i32; 1];
    let status = unsafe { gm_matmul_ref(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 1, 1, 1) };
    assert_eq!(status, GMStatus::Ok);
    assert_eq!(c, [12]);
    assert!(last_error().is_none());
}
