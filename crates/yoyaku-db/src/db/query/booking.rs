//! Booking queries, including the transactional admission check-and-insert.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::connection::DbConnection;
use crate::db::enums::BookingStatus;
use crate::db::schema::{booking, event_type};
use crate::model::booking::{Booking, NewBooking};

/// ## Summary
/// Loads the non-cancelled bookings of an event type whose start instant
/// falls on `date`, ordered by start time. This is the indexed read the slot
/// generator consumes.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn blocking_on_date(
    conn: &mut DbConnection<'_>,
    event_type_id: uuid::Uuid,
    date: NaiveDate,
) -> diesel::QueryResult<Vec<Booking>> {
    let day_start = date.and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + TimeDelta::days(1);

    booking::table
        .filter(booking::event_type_id.eq(event_type_id))
        .filter(booking::status.ne(BookingStatus::Cancelled))
        .filter(booking::start_time.ge(day_start))
        .filter(booking::start_time.lt(day_end))
        .order(booking::start_time.asc())
        .select(Booking::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Atomically admits a booking: within one transaction, locks the event type
/// row (serializing concurrent admissions for the same event type across
/// connections), re-checks for an overlapping non-cancelled booking under
/// half-open semantics, and inserts.
///
/// ## Returns
/// - `Ok(Some(booking))` when the interval was free and the row was inserted
/// - `Ok(None)` when an overlapping booking already exists (nothing written)
///
/// ## Errors
/// Returns a database error if the transaction fails, including when the
/// event type row has disappeared between validation and commit.
pub async fn insert_if_free(
    conn: &mut DbConnection<'_>,
    new: NewBooking,
) -> diesel::QueryResult<Option<Booking>> {
    conn.transaction::<Option<Booking>, diesel::result::Error, _>(|conn| {
        async move {
            let _locked: uuid::Uuid = event_type::table
                .find(new.event_type_id)
                .select(event_type::id)
                .for_update()
                .first(conn)
                .await?;

            let conflict = diesel::select(diesel::dsl::exists(
                booking::table
                    .filter(booking::event_type_id.eq(new.event_type_id))
                    .filter(booking::status.ne(BookingStatus::Cancelled))
                    .filter(booking::start_time.lt(new.end_time))
                    .filter(booking::end_time.gt(new.start_time)),
            ))
            .get_result::<bool>(conn)
            .await?;

            if conflict {
                return Ok(None);
            }

            let created = diesel::insert_into(booking::table)
                .values(&new)
                .returning(Booking::as_select())
                .get_result(conn)
                .await?;

            Ok(Some(created))
        }
        .scope_boxed()
    })
    .await
}

/// ## Summary
/// Finds a booking by id, or `None` if it does not exist.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_by_id(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> diesel::QueryResult<Option<Booking>> {
    booking::table
        .find(id)
        .select(Booking::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists bookings across every event type owned by `host_id`, newest first,
/// paired with the owning event type's title.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_for_host(
    conn: &mut DbConnection<'_>,
    host_id: uuid::Uuid,
) -> diesel::QueryResult<Vec<(Booking, String)>> {
    booking::table
        .inner_join(event_type::table)
        .filter(event_type::host_id.eq(host_id))
        .order(booking::start_time.desc())
        .select((Booking::as_select(), event_type::title))
        .load(conn)
        .await
}

/// ## Summary
/// Lists bookings for one event type, newest first.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_for_event_type(
    conn: &mut DbConnection<'_>,
    event_type_id: uuid::Uuid,
) -> diesel::QueryResult<Vec<Booking>> {
    booking::table
        .filter(booking::event_type_id.eq(event_type_id))
        .order(booking::start_time.desc())
        .select(Booking::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Sets a booking's status. Returns the number of affected rows.
///
/// State-machine validation happens in the service layer; this is the raw
/// write.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_status(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    status: BookingStatus,
) -> diesel::QueryResult<usize> {
    diesel::update(booking::table.find(id))
        .set(booking::status.eq(status))
        .execute(conn)
        .await
}

/// ## Summary
/// Hard-deletes a booking row regardless of status. Administrative override,
/// irreversible.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> diesel::QueryResult<usize> {
    diesel::delete(booking::table.find(id)).execute(conn).await
}
