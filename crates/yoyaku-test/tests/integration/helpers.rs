#![allow(clippy::unused_async, clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Each test builds its own in-memory service, so tests run in parallel
//! without sharing any scheduling state.

use std::sync::Arc;

use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use uuid::Uuid;

use yoyaku_test::app::service_handler::ServiceHandler;
use yoyaku_test::component::constants::HOST_ID_HEADER;
use yoyaku_test::component::scheduling::SchedulingService;
use yoyaku_test::component::store::memory::MemoryStore;

pub use tracing;

/// Creates a fresh in-memory service with the full API router, exactly as
/// `main` wires it when no database is configured.
#[must_use]
pub fn create_test_service() -> Service {
    let store = Arc::new(MemoryStore::new());
    let service = Arc::new(SchedulingService::new(store));

    let router = Router::new()
        .hoop(ServiceHandler { service })
        .push(yoyaku_test::app::api::routes());

    Service::new(router)
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new POST request.
    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a new PUT request.
    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a new PATCH request.
    #[must_use]
    pub fn patch(path: &str) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Creates a new DELETE request.
    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the host identity header.
    #[must_use]
    pub fn host(self, host_id: Uuid) -> Self {
        self.header(HOST_ID_HEADER, &host_id.to_string())
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json_body(mut self, value: &serde_json::Value) -> Self {
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.body = Some(value.to_string().into_bytes());
        self
    }

    /// Sends the request to the test service and returns the response.
    ///
    /// ## Panics
    /// Panics if the request cannot be sent or the response cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            "PUT" => TestClient::put(&url),
            "PATCH" => TestClient::patch(&url),
            "DELETE" => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            String::from_utf8_lossy(&self.body)
        );
        self
    }

    /// Parses the response body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body should be valid JSON")
    }
}

/// Creates an event type through the API and returns its id.
///
/// ## Panics
/// Panics when creation fails.
pub async fn seed_event(
    service: &Service,
    host_id: Uuid,
    title: &str,
    duration_minutes: i32,
) -> Uuid {
    let response = TestRequest::post("/api/events")
        .host(host_id)
        .json_body(&serde_json::json!({
            "title": title,
            "duration_minutes": duration_minutes,
        }))
        .send(service)
        .await
        .assert_status(StatusCode::CREATED);

    let body = response.json();
    body["event"]["id"]
        .as_str()
        .expect("Created event should carry an id")
        .parse()
        .expect("Event id should be a UUID")
}

/// Replaces the host's weekly availability with a single span.
pub async fn seed_weekday_availability(
    service: &Service,
    host_id: Uuid,
    day_of_week: i16,
    start_time: &str,
    end_time: &str,
) {
    TestRequest::post("/api/events/availability")
        .host(host_id)
        .json_body(&serde_json::json!({
            "availabilities": [{
                "day_of_week": day_of_week,
                "start_time": start_time,
                "end_time": end_time,
            }],
        }))
        .send(service)
        .await
        .assert_status(StatusCode::CREATED);
}
