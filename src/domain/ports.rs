use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::entities::{Address, LocationReading, LocationRecord, StoreSnapshot};
use crate::domain::errors::GeocodeError;

// Port for the token -> latest record mapping.
// Every operation runs as one exclusive critical section.
#[async_trait]
pub trait LocationStore: Send + Sync {
    // Insert or fully replace the record for `token`, stamping the write time.
    async fn put(&self, token: String, reading: LocationReading) -> LocationRecord;
    async fn get(&self, token: &str) -> Option<LocationRecord>;
    // Remove every record strictly older than `ttl` at `now`; returns how many went.
    async fn evict_expired(&self, now: DateTime<Utc>, ttl: Duration) -> usize;
    async fn snapshot(&self) -> StoreSnapshot;
}

// The handler depends on this trait, not the concrete HTTP client.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<Address, GeocodeError>;
}

// Port for minting share tokens.
pub trait TokenSource: Send + Sync {
    fn next_token(&self) -> String;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
