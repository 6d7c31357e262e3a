//! Domain model for studio schedule-conflict validation: wall-clock time
//! arithmetic, weekly slots, and conflict findings. Pure logic, no I/O.

pub mod conflict;
pub mod error;
pub mod ids;
pub mod schedule;
pub mod time;
