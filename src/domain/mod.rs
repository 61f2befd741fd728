// Domain layer: location records, ports and token rules.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod token;

pub use entities::{Address, Coordinates, DeviceInfo, LocationReading, LocationRecord, StoreSnapshot};
pub use errors::{GeocodeError, LocationError};
pub use ports::{Clock, LocationStore, ReverseGeocoder, TokenSource};
pub use token::{RandomTokenGenerator, TOKEN_LENGTH};
