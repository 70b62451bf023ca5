//! Postgres-backed store over the Diesel query layer.

use chrono::NaiveDate;
use salvo::async_trait;
use uuid::Uuid;

use yoyaku_db::db::connection::{DbConnection, DbPool};
use yoyaku_db::db::enums::BookingStatus;
use yoyaku_db::db::query;
use yoyaku_db::error::DbError;
use yoyaku_db::model::availability::{AvailabilityRule, NewAvailabilityRule};
use yoyaku_db::model::booking::{Booking, NewBooking};
use yoyaku_db::model::event_type::{EventType, EventTypeChanges, NewEventType};

use crate::error::ServiceResult;
use crate::store::SchedulingStore;

/// Store backed by a bb8 pool of async Postgres connections. Admission
/// atomicity comes from the transactional check-and-insert in the query
/// layer, which locks the event type row.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> ServiceResult<DbConnection<'_>> {
        Ok(self.pool.get().await.map_err(DbError::from)?)
    }
}

#[async_trait]
impl SchedulingStore for PgStore {
    async fn create_event_type(&self, new: NewEventType) -> ServiceResult<EventType> {
        let mut conn = self.conn().await?;
        Ok(query::event_type::create(&mut conn, &new)
            .await
            .map_err(DbError::from)?)
    }

    async fn find_event_type(&self, id: Uuid) -> ServiceResult<Option<EventType>> {
        let mut conn = self.conn().await?;
        Ok(query::event_type::find_by_id(&mut conn, id)
            .await
            .map_err(DbError::from)?)
    }

    async fn list_event_types(&self, host_id: Uuid) -> ServiceResult<Vec<EventType>> {
        let mut conn = self.conn().await?;
        Ok(query::event_type::list_for_host(&mut conn, host_id)
            .await
            .map_err(DbError::from)?)
    }

    async fn update_event_type(
        &self,
        id: Uuid,
        host_id: Uuid,
        changes: EventTypeChanges,
    ) -> ServiceResult<usize> {
        let mut conn = self.conn().await?;
        Ok(query::event_type::update(&mut conn, id, host_id, &changes)
            .await
            .map_err(DbError::from)?)
    }

    async fn delete_event_type(&self, id: Uuid, host_id: Uuid) -> ServiceResult<usize> {
        let mut conn = self.conn().await?;
        Ok(query::event_type::delete(&mut conn, id, host_id)
            .await
            .map_err(DbError::from)?)
    }

    async fn replace_availability(
        &self,
        host_id: Uuid,
        rules: Vec<NewAvailabilityRule>,
    ) -> ServiceResult<usize> {
        let mut conn = self.conn().await?;
        Ok(query::availability::replace_for_host(&mut conn, host_id, rules)
            .await
            .map_err(DbError::from)?)
    }

    async fn availability_for_weekday(
        &self,
        host_id: Uuid,
        day_of_week: i16,
    ) -> ServiceResult<Vec<AvailabilityRule>> {
        let mut conn = self.conn().await?;
        Ok(
            query::availability::for_weekday(&mut conn, host_id, day_of_week)
                .await
                .map_err(DbError::from)?,
        )
    }

    async fn list_availability(&self, host_id: Uuid) -> ServiceResult<Vec<AvailabilityRule>> {
        let mut conn = self.conn().await?;
        Ok(query::availability::list_for_host(&mut conn, host_id)
            .await
            .map_err(DbError::from)?)
    }

    async fn insert_booking_if_free(&self, new: NewBooking) -> ServiceResult<Option<Booking>> {
        let mut conn = self.conn().await?;
        Ok(query::booking::insert_if_free(&mut conn, new)
            .await
            .map_err(DbError::from)?)
    }

    async fn bookings_on_date(
        &self,
        event_type_id: Uuid,
        date: NaiveDate,
    ) -> ServiceResult<Vec<Booking>> {
        let mut conn = self.conn().await?;
        Ok(
            query::booking::blocking_on_date(&mut conn, event_type_id, date)
                .await
                .map_err(DbError::from)?,
        )
    }

    async fn find_booking(&self, id: Uuid) -> ServiceResult<Option<Booking>> {
        let mut conn = self.conn().await?;
        Ok(query::booking::find_by_id(&mut conn, id)
            .await
            .map_err(DbError::from)?)
    }

    async fn list_bookings_for_host(
        &self,
        host_id: Uuid,
    ) -> ServiceResult<Vec<(Booking, String)>> {
        let mut conn = self.conn().await?;
        Ok(query::booking::list_for_host(&mut conn, host_id)
            .await
            .map_err(DbError::from)?)
    }

    async fn list_bookings_for_event_type(
        &self,
        event_type_id: Uuid,
    ) -> ServiceResult<Vec<Booking>> {
        let mut conn = self.conn().await?;
        Ok(
            query::booking::list_for_event_type(&mut conn, event_type_id)
                .await
                .map_err(DbError::from)?,
        )
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> ServiceResult<usize> {
        let mut conn = self.conn().await?;
        Ok(query::booking::update_status(&mut conn, id, status)
            .await
            .map_err(DbError::from)?)
    }

    async fn delete_booking(&self, id: Uuid) -> ServiceResult<usize> {
        let mut conn = self.conn().await?;
        Ok(query::booking::delete(&mut conn, id)
            .await
            .map_err(DbError::from)?)
    }
}
