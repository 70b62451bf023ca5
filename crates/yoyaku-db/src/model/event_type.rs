use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// A named, duration-bound meeting template a host offers for booking.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, serde::Serialize,
)]
#[diesel(table_name = schema::event_type)]
#[diesel(check_for_backend(Pg))]
pub struct EventType {
    pub id: uuid::Uuid,
    pub host_id: uuid::Uuid,
    pub title: String,
    pub duration_minutes: i32,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Insert struct for creating new event types
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::event_type)]
pub struct NewEventType {
    pub id: uuid::Uuid,
    pub host_id: uuid::Uuid,
    pub title: String,
    pub duration_minutes: i32,
    pub description: Option<String>,
}

/// Host-editable event type fields
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::event_type)]
pub struct EventTypeChanges {
    pub title: String,
    pub duration_minutes: i32,
    pub description: Option<String>,
}
