use chrono::{DateTime, Utc};
use std::collections::HashMap;

// Position reported by the sharing client.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    // Reported accuracy radius in meters (0 when the client omits it).
    pub accuracy: f64,
}

// Structured address resolved from a coordinate pair. Fields stay empty when
// reverse geocoding failed or the upstream did not know them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub road: String,
    pub city: String,
    pub country: String,
    pub postcode: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.road.is_empty()
            && self.city.is_empty()
            && self.country.is_empty()
            && self.postcode.is_empty()
    }

    // Human-readable single line built from the known parts.
    pub fn display_line(&self) -> String {
        [&self.road, &self.city, &self.postcode, &self.country]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// Free-form metadata describing the device that posted a reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device: String,
    pub os: String,
    pub browser: String,
    pub language: String,
    pub screen_size: String,
}

// Everything a record carries except the fields the store owns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationReading {
    pub coordinates: Coordinates,
    pub address: Address,
    pub device: DeviceInfo,
}

// Latest reading stored for a token.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationRecord {
    pub token: String,
    pub coordinates: Coordinates,
    pub address: Address,
    pub device: DeviceInfo,
    // Assigned by the store at write time; drives eviction.
    pub recorded_at: DateTime<Utc>,
}

impl LocationRecord {
    pub fn from_reading(token: String, reading: LocationReading, recorded_at: DateTime<Utc>) -> Self {
        Self {
            token,
            coordinates: reading.coordinates,
            address: reading.address,
            device: reading.device,
            recorded_at,
        }
    }
}

// Detached copy of the whole store for introspection.
#[derive(Clone, Debug, Default)]
pub struct StoreSnapshot {
    pub count: usize,
    pub data: HashMap<String, LocationRecord>,
}
