use derive_more::{Display, Error};

/// Contract violations of polynomial operations. 
/// 
/// Operators panic on these; the `try_*` variants report them instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum PolyError { 
    #[display("index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[display("division by the zero polynomial")]
    DivisionByZero,

    #[display("negative exponent: {exponent}")]
    NegativeExponent { exponent: i64 },

    #[display("insufficient capacity: required {required}, got {capacity}")]
    InsufficientCapacity { required: usize, capacity: usize },
}
