use std::fmt;

/// Element types a matrix can hold.
///
/// The reference kernel only ever reads `I8` operands and writes `I32`
/// results; there is no float or quantized-block support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// Signed 8-bit operand.
    I8,
    /// Signed 32-bit accumulator / result.
    I32,
}

impl DType {
    /// Size in bytes of a single element.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::I8 => 1,
            DType::I32 => 4,
        }
    }

    /// The accumulator type used when this dtype is a matmul operand.
    ///
    /// Returns `None` for types that are not valid operands.
    pub fn accumulator(&self) -> Option<DType> {
        match self {
            DType::I8 => Some(DType::I32),
            DType::I32 => None,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::I8 => write!(f, "i8"),
            DType::I32 => write!(f, "i32"),
        }
    }
}
