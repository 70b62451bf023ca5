//! Host identity extraction.
//!
//! Authentication lives outside this service: the gateway in front of it
//! verifies credentials and attaches the host's opaque id in the
//! `x-host-id` header. This middleware only parses that header into the
//! depot; it never verifies anything, and public (guest) routes work
//! without it.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, FlowCtrl, Request, Response, async_trait};
use uuid::Uuid;

use crate::error::ErrorResponse;
use yoyaku_core::constants::HOST_ID_HEADER;

const HOST_ID_DEPOT_KEY: &str = "yoyaku::host_id";

pub struct HostIdentityMiddleware;

#[async_trait]
impl salvo::Handler for HostIdentityMiddleware {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let Some(raw) = req.header::<String>(HOST_ID_HEADER) else {
            return;
        };

        match Uuid::parse_str(&raw) {
            Ok(host_id) => {
                depot.insert(HOST_ID_DEPOT_KEY, host_id);
            }
            Err(_) => {
                tracing::debug!(header = %raw, "Malformed host id header");
                res.status_code(StatusCode::UNAUTHORIZED);
                res.render(Json(ErrorResponse {
                    error: "Malformed host identity".to_owned(),
                }));
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Returns the verified host id for a host-only route, or renders a 401 and
/// returns `None` when the request carried no identity.
pub fn require_host(depot: &Depot, res: &mut Response) -> Option<Uuid> {
    if let Ok(host_id) = depot.get::<Uuid>(HOST_ID_DEPOT_KEY) {
        Some(*host_id)
    } else {
        res.status_code(StatusCode::UNAUTHORIZED);
        res.render(Json(ErrorResponse {
            error: "Host identity required".to_owned(),
        }));
        None
    }
}
