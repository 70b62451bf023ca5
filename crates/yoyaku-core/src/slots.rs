//! Bookable slot generation from weekly availability windows.
//!
//! This is a pure computation over data the caller has already fetched: it
//! performs no I/O and no shared-state mutation, so concurrent slot queries
//! never interfere with each other or with booking admission.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::error::{CoreError, CoreResult};

/// One availability window of a host's day, already filtered to the target
/// date's weekday by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: chrono::NaiveTime,
    pub end: chrono::NaiveTime,
}

/// An interval occupied by an existing non-cancelled booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A derived, unpersisted candidate booking interval. Computed fresh per
/// request; has no stored identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Half-open interval overlap: touching endpoints do not conflict.
#[must_use]
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// ## Summary
/// Computes the ordered sequence of bookable slots for `date`.
///
/// Each window is walked from its start in fixed steps of `duration_minutes`.
/// A candidate `[cursor, cursor + duration)` is dropped when it would cross
/// the window end or when it overlaps any busy interval; the cursor advances
/// by one step either way, so a collision never shifts later slots off the
/// grid. Windows are processed independently and their slots concatenated in
/// window order, not globally time-sorted.
///
/// Past-dated candidates are not filtered here; callers wanting a "no past
/// booking" guarantee must exclude past dates themselves.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` if `duration_minutes` is not positive.
/// No matching window or no free slot is an empty result, not an error.
pub fn generate_slots(
    duration_minutes: i32,
    date: NaiveDate,
    windows: &[AvailabilityWindow],
    busy: &[BusyInterval],
) -> CoreResult<Vec<Slot>> {
    if duration_minutes <= 0 {
        return Err(CoreError::InvalidInput(format!(
            "Event duration must be positive, got {duration_minutes}"
        )));
    }

    let step = TimeDelta::minutes(i64::from(duration_minutes));
    let mut slots = Vec::new();

    for window in windows {
        let window_end = date.and_time(window.end).and_utc();
        let mut cursor = date.and_time(window.start).and_utc();

        while cursor < window_end {
            let slot_end = cursor + step;
            let booked = busy
                .iter()
                .any(|b| overlaps(cursor, slot_end, b.start, b.end));

            if slot_end <= window_end && !booked {
                slots.push(Slot {
                    start: cursor,
                    end: slot_end,
                });
            }

            cursor = slot_end;
        }
    }

    tracing::trace!(
        date = %date,
        duration_minutes,
        window_count = windows.len(),
        busy_count = busy.len(),
        slot_count = slots.len(),
        "Generated slots"
    );

    Ok(slots)
}
