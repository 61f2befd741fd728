use std::{env, time::Duration};

// Runtime/server settings read from the environment.

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn public_base_url() -> Option<String> {
    env::var("PUBLIC_BASE_URL")
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
}

pub fn geocoder_url() -> String {
    env::var("GEOCODER_URL")
        .unwrap_or_else(|_| "https://nominatim.openstreetmap.org/reverse".to_string())
}

// Fixed service limits (intentionally not configurable).
pub const RECORD_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);
pub const GEOCODE_MIN_INTERVAL: Duration = Duration::from_secs(1);
pub const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("location-share/", env!("CARGO_PKG_VERSION"));
