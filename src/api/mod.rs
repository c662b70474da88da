pub mod client;
pub mod traits;
pub mod types;

pub use client::HttpOfferSource;
pub use traits::OfferSource;
pub use types::ReviewDraft;
