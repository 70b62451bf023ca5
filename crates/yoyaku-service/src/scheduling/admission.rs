//! Booking admission: the atomic check-and-commit that turns a request into
//! a persisted booking or a rejection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use yoyaku_db::db::enums::BookingStatus;
use yoyaku_db::model::booking::{Booking, NewBooking};

use crate::error::{ServiceError, ServiceResult};
use crate::scheduling::SchedulingService;

/// A guest's request to book one concrete interval of an event type.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub event_type_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Mutual-exclusion scope keyed by event type id: admissions for the same
/// event type are serialized within this process, admissions for different
/// event types never contend. Lock entries are small and kept for the
/// process lifetime.
#[derive(Debug, Default)]
pub struct EventTypeLocks {
    inner: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl EventTypeLocks {
    fn handle(&self, event_type_id: Uuid) -> ServiceResult<Arc<tokio::sync::Mutex<()>>> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| ServiceError::InvariantViolation("Admission lock registry poisoned"))?;
        Ok(map.entry(event_type_id).or_default().clone())
    }
}

impl SchedulingService {
    /// ## Summary
    /// Admits a booking request: validates it, then checks the interval
    /// against the current booking set and inserts as a single atomic unit.
    /// A new booking starts as `pending` and blocks its slot immediately.
    ///
    /// Admission checks only the existing booking set, not the availability
    /// rules; a caller bypassing slot listing can book outside any window.
    ///
    /// ## Errors
    /// - `InvalidInput` when a field is missing/blank, the interval is
    ///   inverted or empty, or its length differs from the event type's
    ///   duration
    /// - `NotFound` when the event type does not exist
    /// - `SlotUnavailable` when a non-cancelled booking already overlaps the
    ///   interval; nothing is written and the guest should re-fetch slots
    ///   and retry
    #[tracing::instrument(skip(self, request), fields(event_type_id = %request.event_type_id))]
    pub async fn create_booking(&self, request: BookingRequest) -> ServiceResult<Booking> {
        if request.guest_name.trim().is_empty() || request.guest_email.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Guest name and email are required".to_owned(),
            ));
        }
        if request.start_time >= request.end_time {
            return Err(ServiceError::InvalidInput(
                "Booking end must be after its start".to_owned(),
            ));
        }

        let event_type = self
            .store
            .find_event_type(request.event_type_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Event type {}", request.event_type_id))
            })?;

        let expected = TimeDelta::minutes(i64::from(event_type.duration_minutes));
        if request.end_time - request.start_time != expected {
            return Err(ServiceError::InvalidInput(format!(
                "Booking length must equal the event type duration of {} minutes",
                event_type.duration_minutes
            )));
        }

        // Serialize with other admissions for this event type; the store
        // re-checks overlap and inserts inside one transaction.
        let lock = self.admission_locks.handle(request.event_type_id)?;
        let _guard = lock.lock().await;

        let new = NewBooking {
            id: Uuid::new_v4(),
            event_type_id: request.event_type_id,
            guest_name: request.guest_name,
            guest_email: request.guest_email,
            start_time: request.start_time,
            end_time: request.end_time,
            status: BookingStatus::Pending,
        };

        match self.store.insert_booking_if_free(new).await? {
            Some(booking) => {
                tracing::info!(
                    booking_id = %booking.id,
                    event_type_id = %booking.event_type_id,
                    start_time = %booking.start_time,
                    "Booking admitted"
                );
                Ok(booking)
            }
            None => {
                tracing::debug!(
                    event_type_id = %request.event_type_id,
                    start_time = %request.start_time,
                    "Booking rejected, slot unavailable"
                );
                Err(ServiceError::SlotUnavailable)
            }
        }
    }
}
