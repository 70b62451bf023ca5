//! Weekly availability replacement and listing.

use chrono::NaiveTime;
use uuid::Uuid;

use yoyaku_db::model::availability::{AvailabilityRule, NewAvailabilityRule};

use crate::error::{ServiceError, ServiceResult};
use crate::scheduling::SchedulingService;

/// One open interval of the weekly grid, as submitted by the host.
/// `day_of_week` is 0..=6 with 0 = Sunday.
#[derive(Debug, Clone, Copy)]
pub struct WeeklySpan {
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl SchedulingService {
    /// ## Summary
    /// Replaces the host's entire weekly rule set: every submitted span is
    /// validated first, then the store deletes the old set and inserts the
    /// new one as a single transaction. An empty input clears the host's
    /// availability. Resubmitting the same spans is idempotent.
    ///
    /// ## Errors
    /// Returns `InvalidInput` if any span has `start >= end` or a weekday
    /// outside 0..=6; the prior rule set is left unchanged.
    #[tracing::instrument(skip(self, spans), fields(host_id = %host_id, span_count = spans.len()))]
    pub async fn set_weekly_availability(
        &self,
        host_id: Uuid,
        spans: Vec<WeeklySpan>,
    ) -> ServiceResult<usize> {
        for span in &spans {
            if !(0..=6).contains(&span.day_of_week) {
                return Err(ServiceError::InvalidInput(format!(
                    "Day of week must be within 0..=6, got {}",
                    span.day_of_week
                )));
            }
            if span.start_time >= span.end_time {
                return Err(ServiceError::InvalidInput(format!(
                    "Availability window must start before it ends, got {} >= {}",
                    span.start_time, span.end_time
                )));
            }
        }

        let rules: Vec<NewAvailabilityRule> = spans
            .into_iter()
            .map(|span| NewAvailabilityRule {
                id: Uuid::new_v4(),
                host_id,
                day_of_week: span.day_of_week,
                start_time: span.start_time,
                end_time: span.end_time,
            })
            .collect();

        let inserted = self.store.replace_availability(host_id, rules).await?;

        tracing::info!(host_id = %host_id, rule_count = inserted, "Replaced weekly availability");

        Ok(inserted)
    }

    /// ## Summary
    /// Lists the host's full week of rules ordered by weekday, then start
    /// time.
    ///
    /// ## Errors
    /// Returns a storage error if the read fails.
    pub async fn list_availability(&self, host_id: Uuid) -> ServiceResult<Vec<AvailabilityRule>> {
        self.store.list_availability(host_id).await
    }
}
