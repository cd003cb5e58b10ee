use std::cell::RefCell;
use std::ffi::CString;

use gm_tensor::TensorError;

use crate::types::GMStatus;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Store an error message for later retrieval via `gm_last_error`.
pub fn set_last_error(msg: String) {
    log::debug!("gm-ffi error: {}", msg);
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Take the last error message, leaving `None` in its place.
pub fn take_last_error() -> Option<CString> {
    LAST_ERROR.with(|e| e.borrow_mut().take())
}

/// Record `err` and map it to the status code returned across the boundary.
pub fn status_for(err: TensorError) -> GMStatus {
    let status = match err {
        TensorError::LengthMismatch { .. }
        | TensorError::ShapeMismatch { .. }
        | TensorError::MatmulMismatch { .. } => GMStatus::ErrorShapeMismatch,
        TensorError::DTypeMismatch { .. } | TensorError::Other(_) => GMStatus::ErrorInternal,
    };
    set_last_error(err.to_string());
    status
}
