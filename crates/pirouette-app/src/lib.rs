//! Application services: the conflict detector and the schedule validator,
//! generic over the schedule store port.

pub mod detector;
pub mod error;
pub mod validator;
