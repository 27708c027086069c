pub mod aggregate;
pub mod client;
pub mod details;
pub mod error;
pub mod geocode;
pub mod progress;
pub mod search;
pub mod strategy;
pub mod types;

pub use aggregate::{aggregate, prospect};
pub use client::PlacesClient;
pub use details::fetch_place_detail;
pub use error::{PlacesError, ProspectError};
pub use geocode::resolve_coordinates;
pub use progress::{NoProgress, ProgressObserver};
pub use search::{run_search, SearchOptions};
pub use strategy::{SearchRequest, SearchStrategy};
pub use types::{PlaceDetail, PlaceHit};
