use crate::api::types::ReviewDraft;
use crate::error::Result;
use crate::models::{Offer, Review};
use async_trait::async_trait;

/// Asynchronous source of catalog data.
///
/// Every call resolves with a complete collection; the caller decides
/// whether the result is still wanted.
#[async_trait]
pub trait OfferSource: Send + Sync {
    async fn fetch_offers(&self) -> Result<Vec<Offer>>;

    /// `Ok(None)` when no offer has this id
    async fn fetch_offer(&self, id: &str) -> Result<Option<Offer>>;

    async fn fetch_nearby_offers(&self, id: &str) -> Result<Vec<Offer>>;

    async fn fetch_reviews(&self, id: &str) -> Result<Vec<Review>>;

    async fn submit_review(&self, id: &str, draft: &ReviewDraft) -> Result<Review>;

    /// Mark or unmark an offer as favorite; resolves with the updated offer
    async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<Offer>;

    /// Name used in logs
    fn source_name(&self) -> &'static str;
}
