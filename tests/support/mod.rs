// Shared server and upstream bootstrapping for integration tests.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::TcpStream,
    sync::{Arc, OnceLock},
    time::Duration,
};

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use location_share::domain::RandomTokenGenerator;
use location_share::interface_adapters::clients::{NominatimClient, NominatimSettings};
use location_share::interface_adapters::state::{AppState, InMemoryLocationStore, SystemClock};
use serde_json::json;

// Latitude the stub geocoder refuses to resolve, to exercise the fallback path.
pub const UNRESOLVABLE_LATITUDE: f64 = 0.5;

// Base URL of the suite-wide server, set once its socket accepts connections.
static SERVER_URL: OnceLock<String> = OnceLock::new();

// Start the suite-wide server on first use and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        // The server gets its own thread and runtime so it survives each
        // `#[tokio::test]` runtime being torn down.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let geocoder_url = spawn_upstream(stub_geocoder()).await;
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                addr_tx.send(addr).expect("publish server address");

                let state = build_state(geocoder_url, addr.port());
                location_share::serve(listener, state, std::future::pending())
                    .await
                    .expect("server failed");
            });
        });

        let addr = addr_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("server thread never published its address");
        // Binding happens before publishing, but give accept a moment to come up.
        let accepting = (0..100).any(|_| {
            let connected = TcpStream::connect(addr).is_ok();
            if !connected {
                std::thread::sleep(Duration::from_millis(20));
            }
            connected
        });
        assert!(accepting, "server at {addr} never accepted connections");

        format!("http://{addr}")
    })
}

// App state wired to a real geocoder client pointed at `geocoder_url`.
pub fn build_state(geocoder_url: String, port: u16) -> AppState {
    let geocoder = NominatimClient::new(NominatimSettings {
        endpoint: geocoder_url,
        timeout: Duration::from_secs(2),
        user_agent: "location-share-tests/1.0".to_string(),
        // Keep the real spacing so the suite runs against production limits.
        min_interval: location_share::frameworks::config::GEOCODE_MIN_INTERVAL,
    })
    .expect("geocoder client should build");

    AppState {
        store: Arc::new(InMemoryLocationStore::new(SystemClock)),
        geocoder: Arc::new(geocoder),
        tokens: Arc::new(RandomTokenGenerator::from_time_seed()),
        public_base_url: None,
        fallback_base_url: format!("http://localhost:{port}"),
    }
}

// Serve `router` on an ephemeral port and return its reverse-lookup URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral upstream port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub upstream failed");
    });
    format!("http://{addr}/reverse")
}

// Stand-in for the reverse-geocoding upstream used by the shared server.
fn stub_geocoder() -> Router {
    Router::new().route(
        "/reverse",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let latitude = params
                .get("lat")
                .and_then(|value| value.parse::<f64>().ok())
                .unwrap_or_default();
            if latitude == UNRESOLVABLE_LATITUDE {
                return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"error": "down"})));
            }
            (
                StatusCode::OK,
                Json(json!({
                    "address": {
                        "road": "Jalan Braga",
                        "city": "Bandung",
                        "country": "Indonesia",
                        "postcode": "40111"
                    }
                })),
            )
        }),
    )
}
