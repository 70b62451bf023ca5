//! Event type management. Mostly metadata pass-through; the one piece of
//! scheduling semantics is the positive-duration invariant.

use uuid::Uuid;

use yoyaku_db::model::event_type::{EventType, EventTypeChanges, NewEventType};

use crate::error::{ServiceError, ServiceResult};
use crate::scheduling::SchedulingService;

/// Host-submitted event type fields.
#[derive(Debug, Clone)]
pub struct EventTypeInput {
    pub title: String,
    pub duration_minutes: i32,
    pub description: Option<String>,
}

fn validate(input: &EventTypeInput) -> ServiceResult<()> {
    if input.title.trim().is_empty() {
        return Err(ServiceError::InvalidInput("Title is required".to_owned()));
    }
    if input.duration_minutes <= 0 {
        return Err(ServiceError::InvalidInput(format!(
            "Event duration must be positive, got {}",
            input.duration_minutes
        )));
    }
    Ok(())
}

impl SchedulingService {
    /// ## Summary
    /// Creates an event type for the host.
    ///
    /// ## Errors
    /// Returns `InvalidInput` if the title is blank or the duration is not
    /// positive.
    #[tracing::instrument(skip(self, input), fields(host_id = %host_id))]
    pub async fn create_event_type(
        &self,
        host_id: Uuid,
        input: EventTypeInput,
    ) -> ServiceResult<EventType> {
        validate(&input)?;

        let created = self
            .store
            .create_event_type(NewEventType {
                id: Uuid::new_v4(),
                host_id,
                title: input.title,
                duration_minutes: input.duration_minutes,
                description: input.description,
            })
            .await?;

        tracing::info!(event_type_id = %created.id, host_id = %host_id, "Event type created");

        Ok(created)
    }

    /// ## Summary
    /// Lists the host's event types.
    ///
    /// ## Errors
    /// Returns a storage error if the read fails.
    pub async fn list_event_types(&self, host_id: Uuid) -> ServiceResult<Vec<EventType>> {
        self.store.list_event_types(host_id).await
    }

    /// ## Summary
    /// Updates an event type's metadata and duration.
    ///
    /// ## Errors
    /// - `InvalidInput` on a blank title or non-positive duration
    /// - `NotFound` if the id does not exist
    /// - `Unauthorized` if the acting host does not own it
    #[tracing::instrument(skip(self, input), fields(event_type_id = %id, host_id = %host_id))]
    pub async fn update_event_type(
        &self,
        id: Uuid,
        host_id: Uuid,
        input: EventTypeInput,
    ) -> ServiceResult<()> {
        validate(&input)?;
        self.require_owned_event_type(id, host_id).await?;

        self.store
            .update_event_type(
                id,
                host_id,
                EventTypeChanges {
                    title: input.title,
                    duration_minutes: input.duration_minutes,
                    description: input.description,
                },
            )
            .await?;

        Ok(())
    }

    /// ## Summary
    /// Deletes an event type. Existing bookings are not cascaded; they
    /// remain historically valid.
    ///
    /// ## Errors
    /// - `NotFound` if the id does not exist
    /// - `Unauthorized` if the acting host does not own it
    #[tracing::instrument(skip(self), fields(event_type_id = %id, host_id = %host_id))]
    pub async fn delete_event_type(&self, id: Uuid, host_id: Uuid) -> ServiceResult<()> {
        self.require_owned_event_type(id, host_id).await?;
        self.store.delete_event_type(id, host_id).await?;
        Ok(())
    }

    pub(crate) async fn require_owned_event_type(
        &self,
        id: Uuid,
        host_id: Uuid,
    ) -> ServiceResult<EventType> {
        let event_type = self
            .store
            .find_event_type(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Event type {id}")))?;

        if event_type.host_id != host_id {
            return Err(ServiceError::Unauthorized(
                "Event type belongs to another host".to_owned(),
            ));
        }

        Ok(event_type)
    }
}
