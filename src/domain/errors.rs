use std::fmt;

// Domain-level errors for location workflows.
#[derive(Debug, PartialEq)]
pub enum LocationError {
    InvalidToken,
    InvalidCoordinates,
    NotFound,
}

// Reasons a reverse-geocoding lookup produced no address.
#[derive(Debug)]
pub enum GeocodeError {
    Transport(String),
    Timeout,
    Upstream { status: u16 },
    Decode(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Transport(message) => write!(f, "geocoder transport error: {message}"),
            GeocodeError::Timeout => write!(f, "geocoder request timed out"),
            GeocodeError::Upstream { status } => write!(f, "geocoder upstream error {status}"),
            GeocodeError::Decode(message) => {
                write!(f, "geocoder response decode error: {message}")
            }
        }
    }
}

impl std::error::Error for GeocodeError {}
