use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed time: {0:?}")]
    MalformedTime(String),
    #[error("slot end must be strictly after its start")]
    InvalidSlot,
    #[error("invalid day of week: {0}")]
    InvalidDay(u8),
    #[error("invalid id: {0}")]
    InvalidId(String),
}
