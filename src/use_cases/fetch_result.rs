use crate::domain::entities::LocationRecord;
use crate::domain::errors::LocationError;
use crate::domain::ports::LocationStore;

// Result lookup use case with injected dependencies.
pub struct FetchResultUseCase<'a, S: ?Sized> {
    pub store: &'a S,
}

impl<S> FetchResultUseCase<'_, S>
where
    S: LocationStore + ?Sized,
{
    pub async fn execute(&self, token: &str) -> Result<LocationRecord, LocationError> {
        self.store.get(token).await.ok_or(LocationError::NotFound)
    }
}
