use crate::dtype::DType;
use crate::error::{Result, TensorError};

/// CPU-side matrix storage.
///
/// Operands live in `I8`, results in `I32`. Accessors for the wrong variant
/// return a dtype mismatch instead of reinterpreting bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuStorage {
    /// Signed 8-bit operand storage.
    I8(Vec<i8>),
    /// Signed 32-bit result storage.
    I32(Vec<i32>),
}

impl CpuStorage {
    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        match self {
            CpuStorage::I8(v) => v.len(),
            CpuStorage::I32(v) => v.len(),
        }
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the dtype of this storage.
    pub fn dtype(&self) -> DType {
        match self {
            CpuStorage::I8(_) => DType::I8,
            CpuStorage::I32(_) => DType::I32,
        }
    }

    /// Create zero-filled storage for the given dtype and element count.
    pub fn zeros(dtype: DType, n: usize) -> Self {
        match dtype {
            DType::I8 => CpuStorage::I8(vec![0; n]),
            DType::I32 => CpuStorage::I32(vec![0; n]),
        }
    }

    /// Returns the data as an i8 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not I8.
    pub fn as_i8_slice(&self) -> Result<&[i8]> {
        match self {
            CpuStorage::I8(v) => Ok(v.as_slice()),
            other => Err(mismatch(DType::I8, other.dtype())),
        }
    }

    /// Returns the data as an i32 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not I32.
    pub fn as_i32_slice(&self) -> Result<&[i32]> {
        match self {
            CpuStorage::I32(v) => Ok(v.as_slice()),
            other => Err(mismatch(DType::I32, other.dtype())),
        }
    }

    /// Returns the data as a mutable i32 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not I32.
    pub fn as_i32_slice_mut(&mut self) -> Result<&mut [i32]> {
        match self {
            CpuStorage::I32(v) => Ok(v.as_mut_slice()),
            other => Err(mismatch(DType::I32, other.dtype())),
        }
    }
}

fn mismatch(expected: DType, got: DType) -> TensorError {
    TensorError::DTypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    }
}

impl From<Vec<i8>> for CpuStorage {
    fn from(data: Vec<i8>) -> Self {
        CpuStorage::I8(data)
    }
}

impl From<Vec<i32>> for CpuStorage {
    fn from(data: Vec<i32>) -> Self {
        CpuStorage::I32(data)
    }
}
