//! Slot listing: loads the inputs and delegates to the pure generator.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use yoyaku_core::slots::{AvailabilityWindow, BusyInterval, Slot, generate_slots};

use crate::error::{ServiceError, ServiceResult};
use crate::scheduling::SchedulingService;

impl SchedulingService {
    /// ## Summary
    /// Computes the bookable slots of an event type for one calendar date:
    /// loads the host's availability rules for the date's weekday and the
    /// date's non-cancelled bookings, then runs the slot generator over them.
    ///
    /// A weekday with no matching rules yields an empty sequence, not an
    /// error.
    ///
    /// ## Errors
    /// - `NotFound` if the event type does not exist
    /// - `InvalidInput` if the stored duration is not positive
    #[tracing::instrument(skip(self))]
    pub async fn list_slots(
        &self,
        event_type_id: Uuid,
        date: NaiveDate,
    ) -> ServiceResult<Vec<Slot>> {
        let event_type = self
            .store
            .find_event_type(event_type_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Event type {event_type_id}")))?;

        // 0 = Sunday, matching the stored day_of_week convention
        let weekday = i16::try_from(date.weekday().num_days_from_sunday())
            .map_err(|_| ServiceError::InvariantViolation("Weekday out of range"))?;

        let rules = self
            .store
            .availability_for_weekday(event_type.host_id, weekday)
            .await?;
        let bookings = self.store.bookings_on_date(event_type_id, date).await?;

        let windows: Vec<AvailabilityWindow> = rules
            .iter()
            .map(|r| AvailabilityWindow {
                start: r.start_time,
                end: r.end_time,
            })
            .collect();
        let busy: Vec<BusyInterval> = bookings
            .iter()
            .map(|b| BusyInterval {
                start: b.start_time,
                end: b.end_time,
            })
            .collect();

        let slots = generate_slots(event_type.duration_minutes, date, &windows, &busy)?;

        tracing::debug!(
            event_type_id = %event_type_id,
            date = %date,
            slot_count = slots.len(),
            "Listed slots"
        );

        Ok(slots)
    }
}
