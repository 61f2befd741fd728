use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::entities::{LocationReading, LocationRecord, StoreSnapshot};
use crate::domain::ports::{Clock, LocationStore, ReverseGeocoder, TokenSource};

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub store: Arc<dyn LocationStore>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub tokens: Arc<dyn TokenSource>,
    // Origin used for generated links; falls back to the request Host header.
    pub public_base_url: Option<String>,
    // Last-resort origin when neither the config nor the request names one.
    pub fallback_base_url: String,
}

// In-memory store adapter. One mutex guards the whole map, so every operation
// is a single exclusive critical section.
pub struct InMemoryLocationStore<C> {
    records: Mutex<HashMap<String, LocationRecord>>,
    clock: C,
}

impl<C: Clock> InMemoryLocationStore<C> {
    pub fn new(clock: C) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl<C: Clock> LocationStore for InMemoryLocationStore<C> {
    async fn put(&self, token: String, reading: LocationReading) -> LocationRecord {
        let mut records = self.records.lock().await;
        let record = LocationRecord::from_reading(token.clone(), reading, self.clock.now());
        records.insert(token, record.clone());
        record
    }

    async fn get(&self, token: &str) -> Option<LocationRecord> {
        let records = self.records.lock().await;
        records.get(token).cloned()
    }

    async fn evict_expired(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|_, record| now.signed_duration_since(record.recorded_at) <= ttl);
        before - records.len()
    }

    async fn snapshot(&self) -> StoreSnapshot {
        let records = self.records.lock().await;
        StoreSnapshot {
            count: records.len(),
            data: records.clone(),
        }
    }
}

// System clock adapter used outside of tests.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
