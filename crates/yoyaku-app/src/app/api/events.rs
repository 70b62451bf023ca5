use chrono::{NaiveDate, NaiveTime};
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};

use super::parse_uuid_param;
use crate::error::{ErrorResponse, render_error};
use crate::middleware::host_identity::require_host;
use crate::service_handler::get_service_from_depot;
use yoyaku_core::constants::EVENTS_ROUTE_COMPONENT;
use yoyaku_core::slots::Slot;
use yoyaku_db::model::availability::AvailabilityRule;
use yoyaku_db::model::event_type::EventType;
use yoyaku_service::scheduling::{EventTypeInput, WeeklySpan};

#[derive(Debug, Deserialize)]
struct EventTypeRequest {
    title: String,
    duration_minutes: i32,
    #[serde(default)]
    description: Option<String>,
}

impl From<EventTypeRequest> for EventTypeInput {
    fn from(body: EventTypeRequest) -> Self {
        Self {
            title: body.title,
            duration_minutes: body.duration_minutes,
            description: body.description,
        }
    }
}

#[derive(Debug, Serialize)]
struct EventResponse {
    event: EventType,
}

#[derive(Debug, Serialize)]
struct EventsResponse {
    events: Vec<EventType>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WeeklySpanRequest {
    day_of_week: i16,
    start_time: String,
    end_time: String,
}

#[derive(Debug, Deserialize)]
struct SetAvailabilityRequest {
    availabilities: Vec<WeeklySpanRequest>,
}

#[derive(Debug, Serialize)]
struct AvailabilityResponse {
    availability: Vec<AvailabilityRule>,
}

#[derive(Debug, Serialize)]
struct TimeSlotsResponse {
    time_slots: Vec<Slot>,
}

/// Accepts both `HH:MM` and `HH:MM:SS`.
fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

fn render_bad_request(res: &mut Response, message: &str) {
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(ErrorResponse {
        error: message.to_owned(),
    }));
}

#[handler]
async fn create_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };
    let Ok(body) = req.parse_json::<EventTypeRequest>().await else {
        return render_bad_request(res, "Invalid request body");
    };

    match service.create_event_type(host_id, body.into()).await {
        Ok(event) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(EventResponse { event }));
        }
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn list_events_handler(depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };

    match service.list_event_types(host_id).await {
        Ok(events) => res.render(Json(EventsResponse { events })),
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn update_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
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
    let Ok(body) = req.parse_json::<EventTypeRequest>().await else {
        return render_bad_request(res, "Invalid request body");
    };

    match service.update_event_type(event_id, host_id, body.into()).await {
        Ok(()) => res.render(Json(MessageResponse {
            message: "Event updated successfully".to_owned(),
        })),
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn delete_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
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

    match service.delete_event_type(event_id, host_id).await {
        Ok(()) => res.render(Json(MessageResponse {
            message: "Event deleted successfully".to_owned(),
        })),
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn set_availability_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };
    let Ok(body) = req.parse_json::<SetAvailabilityRequest>().await else {
        return render_bad_request(res, "Invalid request body");
    };

    let mut spans = Vec::with_capacity(body.availabilities.len());
    for span in body.availabilities {
        let Some(start_time) = parse_time_of_day(&span.start_time) else {
            return render_bad_request(res, "Invalid start_time, expected HH:MM");
        };
        let Some(end_time) = parse_time_of_day(&span.end_time) else {
            return render_bad_request(res, "Invalid end_time, expected HH:MM");
        };
        spans.push(WeeklySpan {
            day_of_week: span.day_of_week,
            start_time,
            end_time,
        });
    }

    match service.set_weekly_availability(host_id, spans).await {
        Ok(count) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(MessageResponse {
                message: format!("Availability set successfully ({count} rules)"),
            }));
        }
        Err(err) => render_error(res, &err.into()),
    }
}

#[handler]
async fn get_availability_handler(depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(host_id) = require_host(depot, res) else {
        return;
    };

    match service.list_availability(host_id).await {
        Ok(availability) => res.render(Json(AvailabilityResponse { availability })),
        Err(err) => render_error(res, &err.into()),
    }
}

/// Guest-facing: no host identity required.
#[handler]
async fn time_slots_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(service) => service,
        Err(err) => return render_error(res, &err),
    };
    let Some(event_id) = parse_uuid_param(req, res, "event_id") else {
        return;
    };
    let Some(raw_date) = req.query::<String>("date") else {
        return render_bad_request(res, "Date is required");
    };
    let Ok(date) = raw_date.parse::<NaiveDate>() else {
        return render_bad_request(res, "Invalid date, expected YYYY-MM-DD");
    };

    match service.list_slots(event_id, date).await {
        Ok(time_slots) => res.render(Json(TimeSlotsResponse { time_slots })),
        Err(err) => render_error(res, &err.into()),
    }
}

/// Literal segments are routed before the `<event_id>` parameter so that
/// `availability` is never captured as an id.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .get(list_events_handler)
        .post(create_event_handler)
        .push(
            Router::with_path("availability")
                .get(get_availability_handler)
                .post(set_availability_handler),
        )
        .push(Router::with_path("{event_id}/time-slots").get(time_slots_handler))
        .push(
            Router::with_path("{event_id}")
                .put(update_event_handler)
                .delete(delete_event_handler),
        )
}
