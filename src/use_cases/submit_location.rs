use tracing::warn;

use crate::domain::entities::{Address, Coordinates, DeviceInfo, LocationReading, LocationRecord};
use crate::domain::errors::LocationError;
use crate::domain::ports::{LocationStore, ReverseGeocoder};

// Location submission use case with injected dependencies.
pub struct SubmitLocationUseCase<'a, S: ?Sized, G: ?Sized> {
    pub store: &'a S,
    pub geocoder: &'a G,
}

impl<S, G> SubmitLocationUseCase<'_, S, G>
where
    S: LocationStore + ?Sized,
    G: ReverseGeocoder + ?Sized,
{
    pub async fn execute(
        &self,
        token: &str,
        coordinates: Coordinates,
        device: DeviceInfo,
    ) -> Result<LocationRecord, LocationError> {
        if token.trim().is_empty() {
            return Err(LocationError::InvalidToken);
        }
        validate_coordinates(&coordinates)?;

        // Geocoding is best-effort: an upstream outage must not block ingestion.
        let address = match self
            .geocoder
            .resolve(coordinates.latitude, coordinates.longitude)
            .await
        {
            Ok(address) => address,
            Err(err) => {
                warn!(error = %err, "reverse geocoding failed; storing blank address");
                Address::default()
            }
        };

        let reading = LocationReading {
            coordinates,
            address,
            device,
        };

        Ok(self.store.put(token.to_string(), reading).await)
    }
}

fn validate_coordinates(coordinates: &Coordinates) -> Result<(), LocationError> {
    let Coordinates {
        latitude,
        longitude,
        accuracy,
    } = *coordinates;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(LocationError::InvalidCoordinates);
    }
    if !accuracy.is_finite() || accuracy < 0.0 {
        return Err(LocationError::InvalidCoordinates);
    }

    Ok(())
}
