#![allow(clippy::unused_async, unused_must_use)]
//! Tests for weekly availability replacement.

use salvo::http::StatusCode;
use uuid::Uuid;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn set_and_read_back_weekly_availability() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();

    TestRequest::post("/api/events/availability")
        .host(host_id)
        .json_body(&serde_json::json!({
            "availabilities": [
                { "day_of_week": 1, "start_time": "09:00", "end_time": "12:00" },
                { "day_of_week": 3, "start_time": "13:00", "end_time": "17:00" },
            ],
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let response = TestRequest::get("/api/events/availability")
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = response.json();
    let rules = body["availability"]
        .as_array()
        .expect("availability should be a list");
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0]["day_of_week"], 1);
    assert_eq!(rules[0]["start_time"], "09:00:00");
    assert_eq!(rules[1]["day_of_week"], 3);
    assert_eq!(rules[1]["end_time"], "17:00:00");
}

#[test_log::test(tokio::test)]
async fn submitting_a_new_set_replaces_the_old_one() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();

    seed_weekday_availability(&service, host_id, 1, "09:00", "12:00").await;
    seed_weekday_availability(&service, host_id, 2, "14:00", "16:00").await;

    let response = TestRequest::get("/api/events/availability")
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = response.json();
    let rules = body["availability"]
        .as_array()
        .expect("availability should be a list");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0]["day_of_week"], 2);
}

#[test_log::test(tokio::test)]
async fn empty_submission_clears_availability() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();

    seed_weekday_availability(&service, host_id, 1, "09:00", "12:00").await;

    TestRequest::post("/api/events/availability")
        .host(host_id)
        .json_body(&serde_json::json!({ "availabilities": [] }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let response = TestRequest::get("/api/events/availability")
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body["availability"].as_array().map(Vec::len), Some(0));
}

#[test_log::test(tokio::test)]
async fn out_of_range_weekday_is_rejected_without_clearing() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();

    seed_weekday_availability(&service, host_id, 1, "09:00", "12:00").await;

    TestRequest::post("/api/events/availability")
        .host(host_id)
        .json_body(&serde_json::json!({
            "availabilities": [
                { "day_of_week": 7, "start_time": "09:00", "end_time": "12:00" },
            ],
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    // The previous rule set survives a rejected replacement.
    let response = TestRequest::get("/api/events/availability")
        .host(host_id)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.json()["availability"][0]["day_of_week"], 1);
}

#[test_log::test(tokio::test)]
async fn inverted_span_is_rejected() {
    let service = create_test_service();
    let host_id = Uuid::new_v4();

    TestRequest::post("/api/events/availability")
        .host(host_id)
        .json_body(&serde_json::json!({
            "availabilities": [
                { "day_of_week": 1, "start_time": "12:00", "end_time": "09:00" },
            ],
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn hosts_do_not_share_availability() {
    let service = create_test_service();
    let host_a = Uuid::new_v4();
    let host_b = Uuid::new_v4();

    seed_weekday_availability(&service, host_a, 1, "09:00", "12:00").await;

    let response = TestRequest::get("/api/events/availability")
        .host(host_b)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.json()["availability"].as_array().map(Vec::len), Some(0));
}

#[test_log::test(tokio::test)]
async fn availability_routes_require_host_identity() {
    let service = create_test_service();

    TestRequest::get("/api/events/availability")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
