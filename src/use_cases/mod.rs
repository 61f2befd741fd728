// Use cases layer: application workflows for the location service.

pub mod eviction;
pub mod fetch_result;
pub mod issue_link;
pub mod list_records;
pub mod submit_location;

#[cfg(test)]
pub(crate) mod test_support;

pub use eviction::{EvictionSettings, spawn_eviction_sweeper};
pub use fetch_result::FetchResultUseCase;
pub use issue_link::{IssueLinkUseCase, IssuedLink};
pub use list_records::ListRecordsUseCase;
pub use submit_location::SubmitLocationUseCase;
