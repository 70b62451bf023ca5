use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use yoyaku_core::error::CoreError;
use yoyaku_service::scheduling::SchedulingService;

/// Injects the shared scheduling service into every request's depot.
pub struct ServiceHandler {
    pub service: Arc<SchedulingService>,
}

#[async_trait]
impl salvo::Handler for ServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the scheduling service from the depot.
///
/// ## Errors
/// Returns an error if the scheduling service is not found in the depot.
pub fn get_service_from_depot(depot: &salvo::Depot) -> AppResult<Arc<SchedulingService>> {
    depot
        .obtain::<Arc<SchedulingService>>()
        .cloned()
        .map_err(|_err| {
            CoreError::InvariantViolation("Scheduling service not found in depot").into()
        })
}
