use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
    #[error("{operand}: expected {expected} elements, got {got}")]
    LengthMismatch {
        operand: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("dtype mismatch: expected {expected}, got {got}")]
    DTypeMismatch { expected: String, got: String },
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    MatmulMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = TensorError::MatmulMismatch { m: 2, k: 3, k2: 4, n: 5 };
        assert_eq!(e.to_string(), "matmul dimension mismatch: [2x3] @ [4x5]");

        let e = TensorError::LengthMismatch {
            operand: "a",
            expected: 6,
            got: 5,
        };
        assert_eq!(e.to_string(), "a: expected 6 elements, got 5");
    }
}
