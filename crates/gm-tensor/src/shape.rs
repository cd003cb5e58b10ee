use crate::error::{Result, TensorError};
use std::fmt;

/// A 2D matrix shape: `rows` x `cols`, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `[rows, cols]`.
    pub fn dims(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the shape holds no elements.
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// Row-major strides: `[cols, 1]`.
    pub fn strides(&self) -> [usize; 2] {
        [self.cols, 1]
    }

    /// Flat offset of `(row, col)` in row-major storage.
    ///
    /// # Panics
    /// Panics if the position lies outside the shape.
    pub fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for shape {}",
            row,
            col,
            self
        );
        row * self.cols + col
    }

    /// Shape of `a @ b`.
    ///
    /// `a` is [m, k], `b` is [k, n], the result is [m, n]. The inner
    /// dimensions must agree.
    pub fn matmul_shape(a: &Shape, b: &Shape) -> Result<Shape> {
        if a.cols != b.rows {
            return Err(TensorError::MatmulMismatch {
                m: a.rows,
                k: a.cols,
                k2: b.rows,
                n: b.cols,
            });
        }
        Ok(Shape::new(a.rows, b.cols))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}x{}]", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}
