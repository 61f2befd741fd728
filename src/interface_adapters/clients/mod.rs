// The clients defined here talk to external services over HTTP.

pub mod nominatim;
pub mod rate_limit;

pub use nominatim::{ClientBuildError, NominatimClient, NominatimSettings};
pub use rate_limit::RateLimiter;
