//! The scheduling service: slot computation, booking admission, booking
//! lifecycle, and weekly availability replacement over an injected store.

use std::sync::Arc;

use crate::store::SchedulingStore;

pub mod admission;
pub mod availability;
pub mod event_types;
pub mod lifecycle;
pub mod slots;

pub use admission::BookingRequest;
pub use availability::WeeklySpan;
pub use event_types::EventTypeInput;

/// All mutation of the scheduling entities goes through this type; nothing
/// else shares mutable state with it.
pub struct SchedulingService {
    store: Arc<dyn SchedulingStore>,
    admission_locks: admission::EventTypeLocks,
}

impl SchedulingService {
    #[must_use]
    pub fn new(store: Arc<dyn SchedulingStore>) -> Self {
        Self {
            store,
            admission_locks: admission::EventTypeLocks::default(),
        }
    }
}
