//! Boundary contracts between the validation core and its collaborators:
//! the read-only schedule store port and the wire types of the
//! caller-facing validation contract.

pub mod error;
pub mod outbound;
pub mod types;
