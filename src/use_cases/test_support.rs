use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{Address, Coordinates, DeviceInfo, LocationReading};
use crate::domain::errors::GeocodeError;
use crate::domain::ports::{Clock, ReverseGeocoder, TokenSource};

// Settable time source shared between a store and the test body.
#[derive(Clone)]
pub(crate) struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub(crate) fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub(crate) fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock mutex poisoned") = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}

pub(crate) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 7, 0, 0)
        .single()
        .expect("valid fixed time")
}

#[derive(Clone, Copy)]
pub(crate) enum StubOutcome {
    Resolved,
    Unavailable,
}

// Geocoder double that answers from a fixed outcome and counts calls.
#[derive(Clone)]
pub(crate) struct StubGeocoder {
    outcome: StubOutcome,
    address: Address,
    calls: Arc<AtomicUsize>,
}

impl StubGeocoder {
    pub(crate) fn resolving(address: Address) -> Self {
        Self {
            outcome: StubOutcome::Resolved,
            address,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn unavailable() -> Self {
        Self {
            outcome: StubOutcome::Unavailable,
            address: Address::default(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReverseGeocoder for StubGeocoder {
    async fn resolve(&self, _latitude: f64, _longitude: f64) -> Result<Address, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            StubOutcome::Resolved => Ok(self.address.clone()),
            StubOutcome::Unavailable => Err(GeocodeError::Upstream { status: 503 }),
        }
    }
}

// Token source that hands out a scripted sequence.
pub(crate) struct FixedTokens {
    tokens: Mutex<VecDeque<String>>,
}

impl FixedTokens {
    pub(crate) fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: Mutex::new(tokens.into_iter().map(Into::into).collect()),
        }
    }
}

impl TokenSource for FixedTokens {
    fn next_token(&self) -> String {
        self.tokens
            .lock()
            .expect("tokens mutex poisoned")
            .pop_front()
            .expect("fixed token sequence exhausted")
    }
}

pub(crate) fn sample_address() -> Address {
    Address {
        road: "Jalan Braga".to_string(),
        city: "Bandung".to_string(),
        country: "Indonesia".to_string(),
        postcode: "40111".to_string(),
    }
}

pub(crate) fn reading_at(latitude: f64, longitude: f64) -> LocationReading {
    LocationReading {
        coordinates: Coordinates {
            latitude,
            longitude,
            accuracy: 0.0,
        },
        address: Address::default(),
        device: DeviceInfo::default(),
    }
}
