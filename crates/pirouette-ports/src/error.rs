use thiserror::Error;

/// A failed schedule read. This always propagates to the caller as a hard
/// failure of the whole validation call: a slot whose lookup failed must
/// never pass as conflict-free.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("store query timed out")]
    Timeout,
}
