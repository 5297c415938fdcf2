//! API integration tests
//!
//! Run against a live server with a seeded database:
//! cargo test -- --ignored

use chrono::{Duration, Local};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated client
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// First upcoming date with at least one free slot for a service, with its
/// free times
async fn find_free_day(client: &Client, service: &str) -> (String, Vec<String>) {
    for offset in 1..14 {
        let date = (Local::now().date_naive() + Duration::days(offset))
            .format("%Y-%m-%d")
            .to_string();
        let response = client
            .get(format!(
                "{}/availability/free?date={}&service={}",
                BASE_URL, date, service
            ))
            .send()
            .await
            .expect("Failed to query availability");
        let body: Value = response.json().await.expect("Failed to parse availability");
        let times: Vec<String> = body["times"]
            .as_array()
            .map(|a| {
                a.iter()
                    .filter_map(|t| t.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();
        if !times.is_empty() {
            return (date, times);
        }
    }
    panic!("No free slot found in the next two weeks");
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/bookings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_services() {
    let client = Client::new();

    let response = client
        .get(format!("{}/services", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let services = body.as_array().expect("Expected an array");
    assert!(!services.is_empty());
    assert!(services[0]["duration_minutes"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_get_hours() {
    let client = Client::new();

    let response = client
        .get(format!("{}/hours", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["monday"]["open"].is_string());
    assert!(body["sunday"]["closed"].is_boolean());
}

#[tokio::test]
#[ignore]
async fn test_availability_rejects_malformed_date() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/availability?date=garbage&service=1",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_availability_slots_shape() {
    let client = Client::new();
    let (date, _) = find_free_day(&client, "1").await;

    let response = client
        .get(format!(
            "{}/availability?date={}&service=1",
            BASE_URL, date
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let slots = body["slots"].as_array().expect("Expected slots array");
    assert!(!slots.is_empty());
    assert!(slots[0]["time"].is_string());
    assert!(slots[0]["available"].is_boolean());
    assert!(body["occupied"].is_array());

    // ascending time order
    let times: Vec<&str> = slots.iter().filter_map(|s| s["time"].as_str()).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[tokio::test]
#[ignore]
async fn test_booking_flow_and_slot_conflict() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (date, times) = find_free_day(&client, "1").await;
    let time = times.last().expect("No free time").clone();

    // First submission wins the slot
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "date": date,
            "time": time,
            "service": "1",
            "client_name": "Test Client",
            "client_email": "test@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["booking"]["id"].as_i64().expect("No booking ID");
    assert_eq!(body["booking"]["status"], "pending");

    // Second submission for the same slot gets the retryable conflict
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "date": date,
            "time": time,
            "service": "2",
            "client_name": "Other Client",
            "client_email": "other@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    // Confirm, then cancel (cleanup frees the slot)
    let response = client
        .post(format!("{}/bookings/{}/confirm", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "confirmed");

    let response = client
        .post(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // Cancelled is terminal
    let response = client
        .post(format!("{}/bookings/{}/confirm", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_reschedule_to_own_slot() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (date, times) = find_free_day(&client, "2").await;
    let time = times.first().expect("No free time").clone();

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "date": date,
            "time": time,
            "service": "2",
            "client_name": "Reschedule Client",
            "client_email": "reschedule@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["booking"]["id"].as_i64().expect("No booking ID");

    // Rescheduling onto its own slot succeeds: the booking is excluded
    // from its own occupancy
    let response = client
        .put(format!("{}/bookings/{}", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "date": date, "time": time }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // Cleanup
    let _ = client
        .post(format!("{}/bookings/{}/cancel", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["bookings"]["pending"].is_number());
    assert!(body["bookings"]["upcoming"].is_number());
}
