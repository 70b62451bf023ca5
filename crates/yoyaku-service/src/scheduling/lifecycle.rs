//! Booking lifecycle management: status transitions, listings, and the hard
//! delete. All of it is host-only; guests never mutate a booking.

use uuid::Uuid;

use yoyaku_core::status::BookingStatus;
use yoyaku_db::model::booking::Booking;

use crate::error::{ServiceError, ServiceResult};
use crate::scheduling::SchedulingService;

impl SchedulingService {
    /// ## Summary
    /// Moves a booking to `new_status` per the state machine: a non-terminal
    /// booking may be confirmed, cancelled, or completed; `cancelled` and
    /// `completed` are terminal. Cancelling releases the slot but keeps the
    /// row.
    ///
    /// ## Errors
    /// - `NotFound` if the booking does not exist
    /// - `Unauthorized` if the acting host does not own the event type
    /// - `InvalidInput` if the transition is not defined
    #[tracing::instrument(skip(self), fields(booking_id = %booking_id, host_id = %host_id))]
    pub async fn update_booking_status(
        &self,
        booking_id: Uuid,
        host_id: Uuid,
        new_status: BookingStatus,
    ) -> ServiceResult<()> {
        let booking = self.require_managed_booking(booking_id, host_id).await?;

        let current = BookingStatus::from(booking.status);
        if !current.can_transition_to(new_status) {
            return Err(ServiceError::InvalidInput(format!(
                "Booking status may not move from {current} to {new_status}"
            )));
        }

        self.store
            .update_booking_status(booking_id, new_status.into())
            .await?;

        tracing::info!(
            booking_id = %booking_id,
            from = %current,
            to = %new_status,
            "Booking status updated"
        );

        Ok(())
    }

    /// ## Summary
    /// Hard-deletes a booking row regardless of status. This is an
    /// administrative override, not a state-machine transition, and is
    /// irreversible; cancellation is the reversible path.
    ///
    /// ## Errors
    /// - `NotFound` if the booking does not exist
    /// - `Unauthorized` if the acting host does not own the event type
    #[tracing::instrument(skip(self), fields(booking_id = %booking_id, host_id = %host_id))]
    pub async fn delete_booking(&self, booking_id: Uuid, host_id: Uuid) -> ServiceResult<()> {
        self.require_managed_booking(booking_id, host_id).await?;
        self.store.delete_booking(booking_id).await?;

        tracing::info!(booking_id = %booking_id, "Booking deleted");

        Ok(())
    }

    /// ## Summary
    /// Lists bookings across the host's event types, newest first, paired
    /// with the owning event type's title.
    ///
    /// ## Errors
    /// Returns a storage error if the read fails.
    pub async fn list_bookings_for_host(
        &self,
        host_id: Uuid,
    ) -> ServiceResult<Vec<(Booking, String)>> {
        self.store.list_bookings_for_host(host_id).await
    }

    /// ## Summary
    /// Lists one owned event type's bookings, newest first.
    ///
    /// ## Errors
    /// - `NotFound` if the event type does not exist
    /// - `Unauthorized` if the acting host does not own it
    pub async fn list_bookings_for_event_type(
        &self,
        event_type_id: Uuid,
        host_id: Uuid,
    ) -> ServiceResult<Vec<Booking>> {
        self.require_owned_event_type(event_type_id, host_id).await?;
        self.store.list_bookings_for_event_type(event_type_id).await
    }

    /// Resolves a booking and checks the acting host may manage it. A
    /// booking whose event type has been deleted has no manager; nobody may
    /// touch it through this path.
    async fn require_managed_booking(
        &self,
        booking_id: Uuid,
        host_id: Uuid,
    ) -> ServiceResult<Booking> {
        let booking = self
            .store
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Booking {booking_id}")))?;

        let owned = self
            .store
            .find_event_type(booking.event_type_id)
            .await?
            .is_some_and(|event_type| event_type.host_id == host_id);

        if !owned {
            return Err(ServiceError::Unauthorized(
                "Booking does not belong to one of your event types".to_owned(),
            ));
        }

        Ok(booking)
    }
}
