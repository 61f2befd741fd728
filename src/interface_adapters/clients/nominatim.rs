use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::domain::entities::Address;
use crate::domain::errors::GeocodeError;
use crate::domain::ports::ReverseGeocoder;
use crate::interface_adapters::clients::rate_limit::RateLimiter;

// Connection settings for the reverse-geocoding upstream.
#[derive(Debug, Clone)]
pub struct NominatimSettings {
    pub endpoint: String,
    pub timeout: Duration,
    // The upstream usage policy requires an identifying User-Agent.
    pub user_agent: String,
    pub min_interval: Duration,
}

// Only the `address` object of the upstream response is read.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: UpstreamAddress,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpstreamAddress {
    road: Option<String>,
    city: Option<String>,
    // Smaller settlements are reported under these keys instead of `city`.
    town: Option<String>,
    village: Option<String>,
    country: Option<String>,
    postcode: Option<String>,
}

impl From<UpstreamAddress> for Address {
    fn from(value: UpstreamAddress) -> Self {
        Address {
            road: value.road.unwrap_or_default(),
            city: value
                .city
                .or(value.town)
                .or(value.village)
                .unwrap_or_default(),
            country: value.country.unwrap_or_default(),
            postcode: value.postcode.unwrap_or_default(),
        }
    }
}

#[derive(Debug)]
pub enum ClientBuildError {
    Http(reqwest::Error),
    Endpoint(url::ParseError),
}

impl fmt::Display for ClientBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientBuildError::Http(err) => write!(f, "failed to build geocoder http client: {err}"),
            ClientBuildError::Endpoint(err) => write!(f, "invalid geocoder endpoint: {err}"),
        }
    }
}

impl std::error::Error for ClientBuildError {}

// Thin reqwest client for reverse geocoding, rate limited process-wide.
pub struct NominatimClient {
    http: reqwest::Client,
    endpoint: Url,
    limiter: RateLimiter,
}

impl NominatimClient {
    pub fn new(settings: NominatimSettings) -> Result<Self, ClientBuildError> {
        let endpoint = Url::parse(&settings.endpoint).map_err(ClientBuildError::Endpoint)?;
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .build()
            .map_err(ClientBuildError::Http)?;

        Ok(Self {
            http,
            endpoint,
            limiter: RateLimiter::new(settings.min_interval),
        })
    }

    fn lookup_url(&self, latitude: f64, longitude: f64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string());
        url
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    #[tracing::instrument(name = "reverse_geocode", skip(self))]
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<Address, GeocodeError> {
        // Every outbound call passes the gate; callers queue behind each other.
        self.limiter.acquire().await;

        let response = self
            .http
            .get(self.lookup_url(latitude, longitude))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GeocodeError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload = response.json::<ReverseResponse>().await.map_err(|err| {
            if err.is_timeout() {
                GeocodeError::Timeout
            } else {
                GeocodeError::Decode(err.to_string())
            }
        })?;

        tracing::debug!("reverse geocode resolved");
        Ok(payload.address.into())
    }
}

fn map_transport_error(err: reqwest::Error) -> GeocodeError {
    if err.is_timeout() {
        GeocodeError::Timeout
    } else {
        GeocodeError::Transport(err.to_string())
    }
}
