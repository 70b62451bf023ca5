#![allow(clippy::unused_async, unused_must_use)]
//! Tests for booking admission and lifecycle.

use salvo::http::StatusCode;
use uuid::Uuid;

use super::helpers::*;

fn booking_body(event_id: Uuid, start: &str, end: &str) -> serde_json::Value {
    serde_json::json!({
        "event_type_id": event_id,
        "guest_name": "Aki",
        "guest_email": "aki@example.com",
        "start_time": start,
        "end_time": end,
    })
}

async fn seed_booking(service: &salvo::Service, event_id: Uuid, start: &str, end: &str) -> Uuid {
    let response = TestRequest::post("/api/bookings")
        .json_body(&booking_body(event_id, start, end))
        .send(service)
        .await
        .assert_status(StatusCode::CREATED);

    response.json()["booking"]["id"]
        .as_str()
        .expect("Created booking should carry an id")
        .parse()
        .expect("Booking id should be a UUID")
}

#[test_log::test(tokio::test)]
async fn admitted_booking_starts_pending() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;

    let response = TestRequest::post("/api/bookings")
        .json_body(&booking_body(
            event_id,
            "2026-03-02T09:00:00Z",
            "2026-03-02T09:30:00Z",
        ))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let body = response.json();
    assert_eq!(body["booking"]["status"], "pending");
    assert_eq!(body["booking"]["guest_email"], "aki@example.com");
}

#[test_log::test(tokio::test)]
async fn second_booking_of_the_same_interval_conflicts() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;

    seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    TestRequest::post("/api/bookings")
        .json_body(&booking_body(
            event_id,
            "2026-03-02T09:00:00Z",
            "2026-03-02T09:30:00Z",
        ))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[test_log::test(tokio::test)]
async fn touching_intervals_do_not_conflict() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;

    seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;
    seed_booking(&service, event_id, "2026-03-02T09:30:00Z", "2026-03-02T10:00:00Z").await;
}

#[test_log::test(tokio::test)]
async fn interval_must_match_the_event_duration() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;

    TestRequest::post("/api/bookings")
        .json_body(&booking_body(
            event_id,
            "2026-03-02T09:00:00Z",
            "2026-03-02T09:45:00Z",
        ))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn blank_guest_name_is_rejected() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;

    TestRequest::post("/api/bookings")
        .json_body(&serde_json::json!({
            "event_type_id": event_id,
            "guest_name": "  ",
            "guest_email": "aki@example.com",
            "start_time": "2026-03-02T09:00:00Z",
            "end_time": "2026-03-02T09:30:00Z",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn booking_an_unknown_event_type_is_not_found() {
    let service = create_test_service();

    TestRequest::post("/api/bookings")
        .json_body(&booking_body(
            Uuid::new_v4(),
            "2026-03-02T09:00:00Z",
            "2026-03-02T09:30:00Z",
        ))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn host_sees_bookings_with_event_titles() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;
    seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    let response = TestRequest::get("/api/bookings/created")
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = response.json();
    let bookings = body["bookings"].as_array().expect("bookings should be a list");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["event_title"], "Intro call");
    assert_eq!(bookings[0]["guest_name"], "Aki");
}

#[test_log::test(tokio::test)]
async fn booking_lists_require_host_identity() {
    let service = create_test_service();

    TestRequest::get("/api/bookings/created")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    TestRequest::get(&format!("/api/bookings/event/{}", Uuid::new_v4()))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn event_booking_list_is_owner_only() {
    let service = create_test_service();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let event_id = seed_event(&service, owner, "Intro call", 30).await;
    seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    TestRequest::get(&format!("/api/bookings/event/{event_id}"))
        .host(owner)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    TestRequest::get(&format!("/api/bookings/event/{event_id}"))
        .host(intruder)
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn pending_booking_can_be_confirmed() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;
    let booking_id =
        seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    TestRequest::patch(&format!("/api/bookings/{booking_id}/status"))
        .host(host_id)
        .json_body(&serde_json::json!({ "status": "confirmed" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let response = TestRequest::get("/api/bookings/created")
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.json()["bookings"][0]["status"], "confirmed");
}

#[test_log::test(tokio::test)]
async fn confirmed_booking_cannot_return_to_pending() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;
    let booking_id =
        seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    TestRequest::patch(&format!("/api/bookings/{booking_id}/status"))
        .host(host_id)
        .json_body(&serde_json::json!({ "status": "confirmed" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    TestRequest::patch(&format!("/api/bookings/{booking_id}/status"))
        .host(host_id)
        .json_body(&serde_json::json!({ "status": "pending" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn cancelling_frees_the_interval() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;
    let booking_id =
        seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    TestRequest::patch(&format!("/api/bookings/{booking_id}/status"))
        .host(host_id)
        .json_body(&serde_json::json!({ "status": "cancelled" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    // The same interval is bookable again.
    seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;
}

#[test_log::test(tokio::test)]
async fn only_the_owning_host_manages_a_booking() {
    let service = create_test_service();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let event_id = seed_event(&service, owner, "Intro call", 30).await;
    let booking_id =
        seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    TestRequest::patch(&format!("/api/bookings/{booking_id}/status"))
        .host(intruder)
        .json_body(&serde_json::json!({ "status": "confirmed" }))
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    TestRequest::delete(&format!("/api/bookings/{booking_id}"))
        .host(intruder)
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn deleting_a_booking_removes_it() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();
    let event_id = seed_event(&service, host_id, "Intro call", 30).await;
    let booking_id =
        seed_booking(&service, event_id, "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z").await;

    TestRequest::delete(&format!("/api/bookings/{booking_id}"))
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    TestRequest::delete(&format!("/api/bookings/{booking_id}"))
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
