//! Event type CRUD queries.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::event_type;
use crate::model::event_type::{EventType, EventTypeChanges, NewEventType};

/// ## Summary
/// Inserts a new event type and returns the created row.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create(
    conn: &mut DbConnection<'_>,
    new: &NewEventType,
) -> diesel::QueryResult<EventType> {
    diesel::insert_into(event_type::table)
        .values(new)
        .returning(EventType::as_select())
        .get_result(conn)
        .await
}

/// ## Summary
/// Finds an event type by id, or `None` if it does not exist.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_by_id(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> diesel::QueryResult<Option<EventType>> {
    event_type::table
        .find(id)
        .select(EventType::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists every event type owned by `host_id`.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_for_host(
    conn: &mut DbConnection<'_>,
    host_id: uuid::Uuid,
) -> diesel::QueryResult<Vec<EventType>> {
    event_type::table
        .filter(event_type::host_id.eq(host_id))
        .order(event_type::created_at.asc())
        .select(EventType::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Updates an event type, scoped to its owning host. Returns the number of
/// affected rows (0 when the id does not exist or is owned by someone else).
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    host_id: uuid::Uuid,
    changes: &EventTypeChanges,
) -> diesel::QueryResult<usize> {
    diesel::update(
        event_type::table
            .filter(event_type::id.eq(id))
            .filter(event_type::host_id.eq(host_id)),
    )
    .set(changes)
    .execute(conn)
    .await
}

/// ## Summary
/// Deletes an event type, scoped to its owning host. Past bookings are left
/// in place; they remain historically valid.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    host_id: uuid::Uuid,
) -> diesel::QueryResult<usize> {
    diesel::delete(
        event_type::table
            .filter(event_type::id.eq(id))
            .filter(event_type::host_id.eq(host_id)),
    )
    .execute(conn)
    .await
}
