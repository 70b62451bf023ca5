use diesel::{pg::Pg, prelude::*};

use crate::db::{enums::BookingStatus, schema};

/// A guest's reservation of one concrete interval of an event type.
///
/// Cancellation is a status transition, not a row removal; the hard delete
/// endpoint is the only thing that removes rows.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, serde::Serialize,
)]
#[diesel(table_name = schema::booking)]
#[diesel(check_for_backend(Pg))]
pub struct Booking {
    pub id: uuid::Uuid,
    pub event_type_id: uuid::Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub status: BookingStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Insert struct for creating new bookings
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::booking)]
pub struct NewBooking {
    pub id: uuid::Uuid,
    pub event_type_id: uuid::Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub status: BookingStatus,
}
