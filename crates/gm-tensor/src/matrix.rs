use std::fmt;

use log::debug;

use crate::backend::ComputeBackend;
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::CpuStorage;

/// A 2D matrix backed by CPU storage.
///
/// Shape and data travel together: construction rejects any buffer whose
/// length is not `rows * cols`, so kernels never see inconsistent extents.
/// Operations that require computation are dispatched to a `ComputeBackend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    storage: CpuStorage,
    shape: Shape,
}

impl Matrix {
    /// Create a matrix from storage and a shape.
    ///
    /// # Errors
    /// Returns an error if `storage.len() != shape.numel()`.
    pub fn new(storage: CpuStorage, shape: Shape) -> Result<Self> {
        if storage.len() != shape.numel() {
            return Err(TensorError::LengthMismatch {
                operand: "data",
                expected: shape.numel(),
                got: storage.len(),
            });
        }
        Ok(Matrix { storage, shape })
    }

    /// Create an i8 operand matrix from row-major data.
    pub fn from_i8(data: Vec<i8>, rows: usize, cols: usize) -> Result<Self> {
        Matrix::new(CpuStorage::I8(data), Shape::new(rows, cols))
    }

    /// Create an i32 matrix from row-major data.
    pub fn from_i32(data: Vec<i32>, rows: usize, cols: usize) -> Result<Self> {
        Matrix::new(CpuStorage::I32(data), Shape::new(rows, cols))
    }

    /// Create an i8 matrix from fixed-width rows, e.g. `&[[1, 2], [3, 4]]`.
    pub fn from_i8_rows<const C: usize>(rows: &[[i8; C]]) -> Self {
        let data: Vec<i8> = rows.iter().flatten().copied().collect();
        Matrix {
            storage: CpuStorage::I8(data),
            shape: Shape::new(rows.len(), C),
        }
    }

    /// Create a zero-filled matrix.
    pub fn zeros(dtype: DType, shape: Shape) -> Self {
        Matrix {
            storage: CpuStorage::zeros(dtype, shape.numel()),
            shape,
        }
    }

    /// The `n x n` identity in the i8 domain.
    pub fn identity_i8(n: usize) -> Self {
        let mut data = vec![0i8; n * n];
        for i in 0..n {
            data[i * n + i] = 1;
        }
        Matrix {
            storage: CpuStorage::I8(data),
            shape: Shape::new(n, n),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Returns the underlying storage reference.
    pub fn storage(&self) -> &CpuStorage {
        &self.storage
    }

    /// Row-major i8 data. Errors if the matrix is not i8.
    pub fn data_i8(&self) -> Result<&[i8]> {
        self.storage.as_i8_slice()
    }

    /// Row-major i32 data. Errors if the matrix is not i32.
    pub fn data_i32(&self) -> Result<&[i32]> {
        self.storage.as_i32_slice()
    }

    /// One row of an i32 matrix.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    pub fn row_i32(&self, row: usize) -> Result<&[i32]> {
        assert!(row < self.rows(), "row {} out of bounds for {}", row, self.shape);
        let cols = self.cols();
        Ok(&self.data_i32()?[row * cols..(row + 1) * cols])
    }

    /// Copy of an i8 matrix widened element-wise to i32.
    pub fn widen(&self) -> Result<Matrix> {
        let data = self.data_i8()?.iter().map(|&v| v as i32).collect();
        Ok(Matrix {
            storage: CpuStorage::I32(data),
            shape: self.shape,
        })
    }

    /// Integer matrix multiplication using the given backend.
    ///
    /// self is i8 [m, k], other is i8 [k, n], result is i32 [m, n].
    pub fn matmul(&self, other: &Matrix, backend: &dyn ComputeBackend) -> Result<Matrix> {
        let out_shape = Shape::matmul_shape(&self.shape, &other.shape)?;
        let mut out = Matrix::zeros(DType::I32, out_shape);
        self.matmul_into(other, &mut out, backend)?;
        Ok(out)
    }

    /// Like [`Matrix::matmul`] but writes into a caller-owned i32 matrix,
    /// overwriting all of it.
    ///
    /// # Errors
    /// Returns an error if the operands are not i8, the inner dimensions
    /// disagree, or `out` is not an i32 matrix of shape [m, n].
    pub fn matmul_into(
        &self,
        other: &Matrix,
        out: &mut Matrix,
        backend: &dyn ComputeBackend,
    ) -> Result<()> {
        let out_shape = Shape::matmul_shape(&self.shape, &other.shape)?;
        if out.shape != out_shape {
            return Err(TensorError::ShapeMismatch {
                expected: out_shape.dims().to_vec(),
                got: out.shape.dims().to_vec(),
            });
        }

        let a = self.data_i8()?;
        let b = other.data_i8()?;
        let c = out.storage.as_i32_slice_mut()?;

        debug!(
            "matmul {} @ {} on backend '{}'",
            self.shape,
            other.shape,
            backend.name()
        );
        backend.matmul_i8(a, b, c, out_shape.rows(), out_shape.cols(), self.cols())
    }
}

/// Prints one row per line, each value followed by a single space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols();
        match &self.storage {
            CpuStorage::I8(data) => write_rows(f, data, cols, self.rows()),
            CpuStorage::I32(data) => write_rows(f, data, cols, self.rows()),
        }
    }
}

fn write_rows<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    data: &[T],
    cols: usize,
    rows: usize,
) -> fmt::Result {
    for r in 0..rows {
        for v in &data[r * cols..(r + 1) * cols] {
            write!(f, "{} ", v)?;
        }
        writeln!(f)?;
    }
    Ok(())
}
