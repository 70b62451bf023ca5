use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// One recurring weekly open interval during which a host is bookable.
///
/// `day_of_week` is 0..=6 with 0 = Sunday.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, serde::Serialize,
)]
#[diesel(table_name = schema::availability)]
#[diesel(check_for_backend(Pg))]
pub struct AvailabilityRule {
    pub id: uuid::Uuid,
    pub host_id: uuid::Uuid,
    pub day_of_week: i16,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
}

/// Insert struct for creating new availability rules
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::availability)]
pub struct NewAvailabilityRule {
    pub id: uuid::Uuid,
    pub host_id: uuid::Uuid,
    pub day_of_week: i16,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
}
