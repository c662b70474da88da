//! Pure transformations from fetched collections to what the views render.

pub mod cities;
pub mod filter;
pub mod nearby;
pub mod reviews;
pub mod sorting;

pub use cities::{city_or_default, find_city, CITIES, DEFAULT_CITY};
pub use filter::filter_by_city;
pub use nearby::merge_with_current;
pub use reviews::{recent_reviews, MAX_REVIEWS};
pub use sorting::{sort_offers, SortMethod};
