//! Yoyaku scheduling engine - core domain layer.
//!
//! Pure types and algorithms with minimal dependencies: the slot generator,
//! the booking status state machine, configuration, and the core error type.

pub mod config;
pub mod constants;
pub mod error;
pub mod slots;
pub mod status;
