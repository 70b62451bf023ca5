use chrono::{DateTime, Utc};
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::parse_uuid_param;
use crate::error::{ErrorResponse, render_error};
use crate::middleware::host_identity::require_host;
use crate::service_handler::get_service_from_depot;
use yoyaku_core::constants::BOOKINGS_ROUTE_COMPONENT;
use yoyaku_core::status::BookingStatus;
use yoyaku_db::model::booking::Booking;
use yoyaku_service::scheduling::BookingRequest;

#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    event_type_id: Uuid,
    guest_name: String,
    guest_email: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct BookingCreatedResponse {
    message: String,
    booking: Booking,
}

#[derive(Debug, Serialize)]
struct BookingsResponse {
    bookings: Vec<Booking>,
}

/// A host's booking joined with the title of the event type it belongs to.
#[derive(Debug, Serialize)]
struct HostBooking {
    #[serde(flatten)]
    booking: Booking,
    event_title: String,
}

#[derive(Debug, Serialize)]
struct HostBookingsResponse {
    bookings: Vec<HostBooking>,
}

#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: BookingStatus,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

fn render_bad_request(res: &mut Response, message: &str) {
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(ErrorResponse {
        error: message.to_owned(),
    }));
}

/// Guest-facing: anyone holding an event type id may request a booking.
#[handler]
async fn create_booking_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Ok(body) = req.parse_json::<CreateBookingRequest>().await else {
        return render_bad_request(res, "Invalid request body");
    };

    let request = BookingRequest {
        event_type_id: body.event_type_id,
        guest_name: body.guest_name,
        guest_email: body.guest_email,
        start_time: body.start_time,
        end_time: body.end_time,
    };

    match service.create_booking(request).await {
        Ok(booking) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(BookingCreatedResponse {
                message: "Booking created successfully".to_owned(),
                booking,
            }));
        }
        Err(err) => render_error(res, &err.into()),
    }
}

/// All bookings made against the calling host's event types, newest first.
#[handler]
async fn list_created_handler(depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };

    match service.list_bookings_for_host(host_id).await {
        Ok(rows) => {
            let bookings = rows
                .into_iter()
                .map(|(booking, event_title)| HostBooking {
                    booking,
                    event_title,
                })
                .collect();
            res.render(Json(HostBookingsResponse { bookings }));
        }
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn list_for_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };
    let Some(event_id) = parse_uuid_param(req, res, "event_id") else {
        return;
    };

    match service.list_bookings_for_event_type(event_id, host_id).await {
        Ok(bookings) => res.render(Json(BookingsResponse { bookings })),
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn update_status_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };
    let Some(booking_id) = parse_uuid_param(req, res, "booking_id") else {
        return;
    };
    let Ok(body) = req.parse_json::<UpdateStatusRequest>().await else {
        return render_bad_request(res, "Invalid request body");
    };

    match service
        .update_booking_status(booking_id, host_id, body.status)
        .await
    {
        Ok(()) => res.render(Json(MessageResponse {
            message: "Booking status updated successfully".to_owned(),
        })),
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn delete_booking_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };
    let Some(booking_id) = parse_uuid_param(req, res, "booking_id") else {
        return;
    };

    match service.delete_booking(booking_id, host_id).await {
        Ok(()) => res.render(Json(MessageResponse {
            message: "Booking deleted successfully".to_owned(),
        })),
        Err(err) => render_error(res, &err.into()),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(BOOKINGS_ROUTE_COMPONENT)
        .post(create_booking_handler)
        .push(Router::with_path("created").get(list_created_handler))
        .push(Router::with_path("event/{event_id}").get(list_for_event_handler))
        .push(Router::with_path("{booking_id}/status").patch(update_status_handler))
        .push(Router::with_path("{booking_id}").delete(delete_booking_handler))
}
