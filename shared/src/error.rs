use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("invalid index: {0:?}")]
    InvalidIndex(String),
    #[error("index {index} out of range for {len} cats")]
    IndexOutOfRange { index: i128, len: usize },
    #[error("cat at position {0} has an empty name")]
    EmptyName(usize),
}

pub type Result<T> = std::result::Result<T, VoteError>;
