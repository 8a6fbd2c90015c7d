use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DsuError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key table is full ({capacity} keys)")]
    CapacityExhausted { capacity: usize },
}
