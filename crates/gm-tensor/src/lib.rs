//! `gm-tensor` - golden `i8 x i8 -> i32` matrix multiplication.
//!
//! This crate provides:
//! - The reference kernel [`matmul_ref`] / [`matmul_ref_into`] on flat
//!   row-major slices
//! - A `Matrix` container that keeps shape and data consistent
//! - A `ComputeBackend` trait with the golden `ReferenceBackend`
//! - Exact-output verification of other backends against the reference
//!
//! Preconditions are checked: mismatched buffer lengths panic in the slice
//! kernel and return [`TensorError`] everywhere else, instead of reading or
//! writing out of bounds. Well-formed inputs behave exactly as the unchecked
//! C reference does.

pub mod backend;
pub mod cpu;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod shape;
pub mod storage;
pub mod verify;

// Re-export primary types at the crate root for convenience.
pub use backend::ComputeBackend;
pub use cpu::matmul::{matmul_ref, matmul_ref_into, MAX_EXACT_K};
pub use cpu::ReferenceBackend;
pub use dtype::DType;
pub use error::{Result, TensorError};
pub use matrix::Matrix;
pub use shape::Shape;
pub use storage::CpuStorage;
pub use verify::{verify_backend, verify_output, verify_slices, Mismatch, VerifyOptions, VerifyReport};
