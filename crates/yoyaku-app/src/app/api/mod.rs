mod bookings;
mod events;
mod healthcheck;

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Request, Response, Router};

use crate::error::ErrorResponse;
use crate::middleware::host_identity::HostIdentityMiddleware;
use yoyaku_core::constants::API_ROUTE_COMPONENT;

/// ## Summary
/// Constructs the main API router. Guest routes (slot listing, booking
/// creation) need no identity; host routes read the identity the middleware
/// parsed into the depot.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(HostIdentityMiddleware)
        .push(healthcheck::routes())
        .push(events::routes())
        .push(bookings::routes())
}

/// Parses a UUID path parameter, rendering a 400 when missing or malformed.
fn parse_uuid_param(req: &Request, res: &mut Response, name: &str) -> Option<uuid::Uuid> {
    let Some(raw) = req.param::<String>(name) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: format!("Missing {name} parameter"),
        }));
        return None;
    };

    match uuid::Uuid::parse_str(&raw) {
        Ok(id) => Some(id),
        Err(_) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: format!("Invalid {name} format"),
            }));
            None
        }
    }
}
