//! Weekly availability queries.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::connection::DbConnection;
use crate::db::schema::availability;
use crate::model::availability::{AvailabilityRule, NewAvailabilityRule};

/// ## Summary
/// Replaces a host's entire rule set in one transaction: delete all existing
/// rules, then insert the provided ones. An empty input clears the host's
/// availability. Partial application is not supported; on any failure the
/// prior rule set is left unchanged.
///
/// ## Errors
/// Returns a database error if the transaction fails.
pub async fn replace_for_host(
    conn: &mut DbConnection<'_>,
    host_id: uuid::Uuid,
    rules: Vec<NewAvailabilityRule>,
) -> diesel::QueryResult<usize> {
    conn.transaction::<usize, diesel::result::Error, _>(|conn| {
        async move {
            diesel::delete(availability::table.filter(availability::host_id.eq(host_id)))
                .execute(conn)
                .await?;

            if rules.is_empty() {
                return Ok(0);
            }

            diesel::insert_into(availability::table)
                .values(&rules)
                .execute(conn)
                .await
        }
        .scope_boxed()
    })
    .await
}

/// ## Summary
/// Loads a host's rules for one weekday (0 = Sunday), ordered by start time.
/// This is the indexed read the slot generator consumes.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn for_weekday(
    conn: &mut DbConnection<'_>,
    host_id: uuid::Uuid,
    day_of_week: i16,
) -> diesel::QueryResult<Vec<AvailabilityRule>> {
    availability::table
        .filter(availability::host_id.eq(host_id))
        .filter(availability::day_of_week.eq(day_of_week))
        .order(availability::start_time.asc())
        .select(AvailabilityRule::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Lists a host's full week of rules ordered by weekday, then start time.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_for_host(
    conn: &mut DbConnection<'_>,
    host_id: uuid::Uuid,
) -> diesel::QueryResult<Vec<AvailabilityRule>> {
    availability::table
        .filter(availability::host_id.eq(host_id))
        .order((
            availability::day_of_week.asc(),
            availability::start_time.asc(),
        ))
        .select(AvailabilityRule::as_select())
        .load(conn)
        .await
}
