use crate::domain::entities::StoreSnapshot;
use crate::domain::ports::LocationStore;

// Operational dump of every stored record.
pub struct ListRecordsUseCase<'a, S: ?Sized> {
    pub store: &'a S,
}

impl<S> ListRecordsUseCase<'_, S>
where
    S: LocationStore + ?Sized,
{
    pub async fn execute(&self) -> StoreSnapshot {
        self.store.snapshot().await
    }
}
