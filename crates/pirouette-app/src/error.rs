use pirouette_core::error::DomainError;
use pirouette_ports::error::StoreError;
use thiserror::Error;

/// Hard failure of a whole validation call. Distinct from `valid: false`,
/// which means the call succeeded and conflicts were found.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid schedule: {0}")]
    Schedule(#[from] DomainError),
    #[error("schedule store: {0}")]
    Store(#[from] StoreError),
}
