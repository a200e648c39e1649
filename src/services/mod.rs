// Service exports
pub mod cache;
pub mod itinerary;
pub mod repository;

pub use cache::{CacheKey, CacheManager, CacheError};
pub use itinerary::{ItineraryClient, ItineraryError};
pub use repository::{
    DestinationCatalog, MemoryCatalog, MemoryProfileStore, PostgresStore, ProfileStore, StoreError,
};
