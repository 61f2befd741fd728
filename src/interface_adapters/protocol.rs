use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::{Coordinates, DeviceInfo, LocationRecord, StoreSnapshot};

// Request payload posted by the share page.
#[derive(Debug, Deserialize)]
pub struct LocationSubmission {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub device_info: Option<DeviceInfoPayload>,
}

impl LocationSubmission {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy: self.accuracy.unwrap_or_default(),
        }
    }

    pub fn device(self) -> DeviceInfo {
        self.device_info.map(Into::into).unwrap_or_default()
    }
}

// Browser-reported device metadata; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeviceInfoPayload {
    pub device: Option<String>,
    pub os: Option<String>,
    pub browser: Option<String>,
    pub language: Option<String>,
    pub screen_size: Option<String>,
}

impl From<DeviceInfoPayload> for DeviceInfo {
    fn from(value: DeviceInfoPayload) -> Self {
        DeviceInfo {
            device: value.device.unwrap_or_default(),
            os: value.os.unwrap_or_default(),
            browser: value.browser.unwrap_or_default(),
            language: value.language.unwrap_or_default(),
            screen_size: value.screen_size.unwrap_or_default(),
        }
    }
}

// Response payload for a freshly minted share link.
#[derive(Debug, Serialize)]
pub struct GenerateLinkResponse {
    pub share_link: String,
    pub result_link: String,
    pub user_id: String,
}

// Flat wire form of a stored record.
#[derive(Debug, Serialize)]
pub struct LocationResultResponse {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub address: String,
    pub road: String,
    pub city: String,
    pub country: String,
    pub postcode: String,
    pub device: String,
    pub os: String,
    pub browser: String,
    pub language: String,
    pub screen_size: String,
    // RFC 3339, second precision.
    pub timestamp: String,
}

impl From<LocationRecord> for LocationResultResponse {
    fn from(record: LocationRecord) -> Self {
        Self {
            address: record.address.display_line(),
            timestamp: record.recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            user_id: record.token,
            latitude: record.coordinates.latitude,
            longitude: record.coordinates.longitude,
            accuracy: record.coordinates.accuracy,
            road: record.address.road,
            city: record.address.city,
            country: record.address.country,
            postcode: record.address.postcode,
            device: record.device.device,
            os: record.device.os,
            browser: record.device.browser,
            language: record.device.language,
            screen_size: record.device.screen_size,
        }
    }
}

// Response payload for the debug listing. Keys are sorted for stable output.
#[derive(Debug, Serialize)]
pub struct DebugListResponse {
    pub count: usize,
    pub data: BTreeMap<String, LocationResultResponse>,
}

impl From<StoreSnapshot> for DebugListResponse {
    fn from(snapshot: StoreSnapshot) -> Self {
        Self {
            count: snapshot.count,
            data: snapshot
                .data
                .into_iter()
                .map(|(token, record)| (token, record.into()))
                .collect(),
        }
    }
}

// Query string for the share page.
#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub id: Option<String>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
