mod support;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::time::Duration;

// Upstream that answers well after the posting client has given up.
fn slow_geocoder(delay: Duration) -> Router {
    Router::new().route(
        "/reverse",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({"address": {"city": "Bandung", "country": "Indonesia"}}))
        }),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_reading_is_stored_when_poster_disconnects_mid_lookup() {
    let geocoder_url = support::spawn_upstream(slow_geocoder(Duration::from_millis(800))).await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    let state = support::build_state(geocoder_url, addr.port());
    tokio::spawn(location_share::serve(listener, state, std::future::pending()));
    let base_url = format!("http://{addr}");

    // Give up long before the upstream answers, dropping the connection.
    let impatient = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client should build");
    let posted = impatient
        .post(format!("{base_url}/location/abc123xyz789"))
        .json(&json!({"latitude": 1.0, "longitude": 2.0}))
        .send()
        .await;
    assert!(posted.is_err(), "post should time out on the client side");

    // Let the lookup finish server-side.
    tokio::time::sleep(Duration::from_secs(2)).await;

    let res = reqwest::Client::new()
        .get(format!("{base_url}/result/abc123xyz789"))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let record: Value = res.json().await.expect("result should be json");
    assert_eq!(record["latitude"], 1.0);
    assert_eq!(record["longitude"], 2.0);
    assert_eq!(record["city"], "Bandung");
}
