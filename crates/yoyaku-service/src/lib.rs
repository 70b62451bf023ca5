//! Yoyaku scheduling engine - service layer.
//!
//! Composes the stores and the core slot generator behind the
//! [`scheduling::SchedulingService`] API: read availability, compute slots,
//! admit bookings, manage the booking lifecycle.

pub mod error;
pub mod scheduling;
pub mod store;
