//! Injected store abstraction over the persisted entities.
//!
//! The service depends on this trait rather than a shared database handle,
//! which keeps slot generation and admission testable against the in-memory
//! store and leaves the Postgres store as one implementation among others.

use chrono::NaiveDate;
use salvo::async_trait;
use uuid::Uuid;

use yoyaku_db::db::enums::BookingStatus;
use yoyaku_db::model::availability::{AvailabilityRule, NewAvailabilityRule};
use yoyaku_db::model::booking::{Booking, NewBooking};
use yoyaku_db::model::event_type::{EventType, EventTypeChanges, NewEventType};

use crate::error::ServiceResult;

pub mod memory;
pub mod pg;

/// CRUD plus the two indexed reads the scheduling engine needs:
/// "non-cancelled bookings for event type X on date D" and "availability
/// rules for host H on weekday W".
///
/// Methods are mechanical; the failure taxonomy (`NotFound`,
/// `SlotUnavailable`, ...) is applied by the service on top of the `Option`
/// returns.
#[async_trait]
pub trait SchedulingStore: Send + Sync {
    // Event types

    async fn create_event_type(&self, new: NewEventType) -> ServiceResult<EventType>;

    async fn find_event_type(&self, id: Uuid) -> ServiceResult<Option<EventType>>;

    async fn list_event_types(&self, host_id: Uuid) -> ServiceResult<Vec<EventType>>;

    /// Returns the number of updated rows; 0 when the id does not exist or
    /// belongs to another host.
    async fn update_event_type(
        &self,
        id: Uuid,
        host_id: Uuid,
        changes: EventTypeChanges,
    ) -> ServiceResult<usize>;

    async fn delete_event_type(&self, id: Uuid, host_id: Uuid) -> ServiceResult<usize>;

    // Weekly availability

    /// Replaces the host's whole rule set atomically (delete-all then
    /// insert-all); on failure the prior rule set survives untouched.
    async fn replace_availability(
        &self,
        host_id: Uuid,
        rules: Vec<NewAvailabilityRule>,
    ) -> ServiceResult<usize>;

    async fn availability_for_weekday(
        &self,
        host_id: Uuid,
        day_of_week: i16,
    ) -> ServiceResult<Vec<AvailabilityRule>>;

    async fn list_availability(&self, host_id: Uuid) -> ServiceResult<Vec<AvailabilityRule>>;

    // Bookings

    /// Atomic check-and-insert: returns `None`, writing nothing, when a
    /// non-cancelled booking already overlaps the requested interval under
    /// half-open semantics. This is the double-booking guard.
    async fn insert_booking_if_free(&self, new: NewBooking) -> ServiceResult<Option<Booking>>;

    /// Non-cancelled bookings of the event type starting on `date`.
    async fn bookings_on_date(
        &self,
        event_type_id: Uuid,
        date: NaiveDate,
    ) -> ServiceResult<Vec<Booking>>;

    async fn find_booking(&self, id: Uuid) -> ServiceResult<Option<Booking>>;

    /// Bookings across the host's event types, newest first, with the
    /// owning event type's title.
    async fn list_bookings_for_host(&self, host_id: Uuid)
    -> ServiceResult<Vec<(Booking, String)>>;

    async fn list_bookings_for_event_type(&self, event_type_id: Uuid)
    -> ServiceResult<Vec<Booking>>;

    async fn update_booking_status(&self, id: Uuid, status: BookingStatus)
    -> ServiceResult<usize>;

    /// Hard delete, regardless of status.
    async fn delete_booking(&self, id: Uuid) -> ServiceResult<usize>;
}
