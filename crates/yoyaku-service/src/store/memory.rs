//! In-memory store: the test double, and the standalone mode used when no
//! database URL is configured. Keeps no state across restarts.

use std::sync::Mutex;

use chrono::{NaiveDate, NaiveTime, TimeDelta, Utc};
use salvo::async_trait;
use uuid::Uuid;

use yoyaku_core::slots::overlaps;
use yoyaku_db::db::enums::BookingStatus;
use yoyaku_db::model::availability::{AvailabilityRule, NewAvailabilityRule};
use yoyaku_db::model::booking::{Booking, NewBooking};
use yoyaku_db::model::event_type::{EventType, EventTypeChanges, NewEventType};

use crate::error::{ServiceError, ServiceResult};
use crate::store::SchedulingStore;

#[derive(Debug, Default)]
struct State {
    event_types: Vec<EventType>,
    bookings: Vec<Booking>,
    rules: Vec<AvailabilityRule>,
}

/// All state behind one mutex, so check-and-insert admission is trivially
/// atomic and rule-set replacement is all-or-nothing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> ServiceResult<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| ServiceError::InvariantViolation("Memory store lock poisoned"))
    }
}

#[async_trait]
impl SchedulingStore for MemoryStore {
    async fn create_event_type(&self, new: NewEventType) -> ServiceResult<EventType> {
        let mut state = self.lock()?;
        let event_type = EventType {
            id: new.id,
            host_id: new.host_id,
            title: new.title,
            duration_minutes: new.duration_minutes,
            description: new.description,
            created_at: Utc::now(),
        };
        state.event_types.push(event_type.clone());
        Ok(event_type)
    }

    async fn find_event_type(&self, id: Uuid) -> ServiceResult<Option<EventType>> {
        let state = self.lock()?;
        Ok(state.event_types.iter().find(|e| e.id == id).cloned())
    }

    async fn list_event_types(&self, host_id: Uuid) -> ServiceResult<Vec<EventType>> {
        let state = self.lock()?;
        let mut listed: Vec<EventType> = state
            .event_types
            .iter()
            .filter(|e| e.host_id == host_id)
            .cloned()
            .collect();
        listed.sort_by_key(|e| e.created_at);
        Ok(listed)
    }

    async fn update_event_type(
        &self,
        id: Uuid,
        host_id: Uuid,
        changes: EventTypeChanges,
    ) -> ServiceResult<usize> {
        let mut state = self.lock()?;
        let Some(event_type) = state
            .event_types
            .iter_mut()
            .find(|e| e.id == id && e.host_id == host_id)
        else {
            return Ok(0);
        };
        event_type.title = changes.title;
        event_type.duration_minutes = changes.duration_minutes;
        event_type.description = changes.description;
        Ok(1)
    }

    async fn delete_event_type(&self, id: Uuid, host_id: Uuid) -> ServiceResult<usize> {
        let mut state = self.lock()?;
        let before = state.event_types.len();
        state
            .event_types
            .retain(|e| !(e.id == id && e.host_id == host_id));
        Ok(before - state.event_types.len())
    }

    async fn replace_availability(
        &self,
        host_id: Uuid,
        rules: Vec<NewAvailabilityRule>,
    ) -> ServiceResult<usize> {
        let mut state = self.lock()?;
        state.rules.retain(|r| r.host_id != host_id);
        let inserted = rules.len();
        state.rules.extend(rules.into_iter().map(|r| AvailabilityRule {
            id: r.id,
            host_id: r.host_id,
            day_of_week: r.day_of_week,
            start_time: r.start_time,
            end_time: r.end_time,
        }));
        Ok(inserted)
    }

    async fn availability_for_weekday(
        &self,
        host_id: Uuid,
        day_of_week: i16,
    ) -> ServiceResult<Vec<AvailabilityRule>> {
        let state = self.lock()?;
        let mut rules: Vec<AvailabilityRule> = state
            .rules
            .iter()
            .filter(|r| r.host_id == host_id && r.day_of_week == day_of_week)
            .cloned()
            .collect();
        rules.sort_by_key(|r| r.start_time);
        Ok(rules)
    }

    async fn list_availability(&self, host_id: Uuid) -> ServiceResult<Vec<AvailabilityRule>> {
        let state = self.lock()?;
        let mut rules: Vec<AvailabilityRule> = state
            .rules
            .iter()
            .filter(|r| r.host_id == host_id)
            .cloned()
            .collect();
        rules.sort_by_key(|r| (r.day_of_week, r.start_time));
        Ok(rules)
    }

    async fn insert_booking_if_free(&self, new: NewBooking) -> ServiceResult<Option<Booking>> {
        // One critical section covers the overlap check and the insert.
        let mut state = self.lock()?;

        let conflict = state.bookings.iter().any(|b| {
            b.event_type_id == new.event_type_id
                && yoyaku_core::status::BookingStatus::from(b.status).blocks_slot()
                && overlaps(new.start_time, new.end_time, b.start_time, b.end_time)
        });
        if conflict {
            return Ok(None);
        }

        let booking = Booking {
            id: new.id,
            event_type_id: new.event_type_id,
            guest_name: new.guest_name,
            guest_email: new.guest_email,
            start_time: new.start_time,
            end_time: new.end_time,
            status: new.status,
            created_at: Utc::now(),
        };
        state.bookings.push(booking.clone());
        Ok(Some(booking))
    }

    async fn bookings_on_date(
        &self,
        event_type_id: Uuid,
        date: NaiveDate,
    ) -> ServiceResult<Vec<Booking>> {
        let day_start = date.and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + TimeDelta::days(1);

        let state = self.lock()?;
        let mut bookings: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|b| {
                b.event_type_id == event_type_id
                    && b.status != BookingStatus::Cancelled
                    && b.start_time >= day_start
                    && b.start_time < day_end
            })
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.start_time);
        Ok(bookings)
    }

    async fn find_booking(&self, id: Uuid) -> ServiceResult<Option<Booking>> {
        let state = self.lock()?;
        Ok(state.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list_bookings_for_host(
        &self,
        host_id: Uuid,
    ) -> ServiceResult<Vec<(Booking, String)>> {
        let state = self.lock()?;
        let mut listed: Vec<(Booking, String)> = state
            .bookings
            .iter()
            .filter_map(|b| {
                state
                    .event_types
                    .iter()
                    .find(|e| e.id == b.event_type_id && e.host_id == host_id)
                    .map(|e| (b.clone(), e.title.clone()))
            })
            .collect();
        listed.sort_by(|a, b| b.0.start_time.cmp(&a.0.start_time));
        Ok(listed)
    }

    async fn list_bookings_for_event_type(
        &self,
        event_type_id: Uuid,
    ) -> ServiceResult<Vec<Booking>> {
        let state = self.lock()?;
        let mut bookings: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|b| b.event_type_id == event_type_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(bookings)
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> ServiceResult<usize> {
        let mut state = self.lock()?;
        let Some(booking) = state.bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(0);
        };
        booking.status = status;
        Ok(1)
    }

    async fn delete_booking(&self, id: Uuid) -> ServiceResult<usize> {
        let mut state = self.lock()?;
        let before = state.bookings.len();
        state.bookings.retain(|b| b.id != id);
        Ok(before - state.bookings.len())
    }
}
