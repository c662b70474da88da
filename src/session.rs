//! Runs fetches against an `OfferSource` and writes the results into a `Store`.
//!
//! The session lives on one task. Store borrows never span an `.await`, so
//! several loads can be in flight at once (e.g. under `tokio::join!`); the
//! request ledger decides which of their responses may land. Readers get the
//! store through [`Session::view`], which scopes the borrow to a closure.

use crate::api::{OfferSource, ReviewDraft};
use crate::catalog::SortMethod;
use crate::error::{DataError, Result};
use crate::state::{Payload, Resource, SelectionState, Store, Ticket};
use std::cell::RefCell;
use tracing::{debug, info};

pub struct Session<S> {
    source: S,
    store: RefCell<Store>,
}

impl<S: OfferSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self::with_selection(source, SelectionState::default())
    }

    pub fn with_selection(source: S, selection: SelectionState) -> Self {
        Self {
            source,
            store: RefCell::new(Store::with_selection(selection)),
        }
    }

    /// Run `read` against the current snapshot
    pub fn view<R>(&self, read: impl FnOnce(&Store) -> R) -> R {
        read(&self.store.borrow())
    }

    pub fn select_city(&self, name: impl Into<String>) {
        self.store.borrow_mut().select_city(name);
    }

    pub fn select_sort(&self, method: SortMethod) {
        self.store.borrow_mut().select_sort(method);
    }

    pub fn set_active_offer(&self, id: Option<String>) {
        self.store.borrow_mut().set_active_offer(id);
    }

    pub async fn load_offers(&self) -> Result<()> {
        info!("Loading offers from {}", self.source.source_name());
        let ticket = self.begin(Resource::Offers);
        let offers = self.source.fetch_offers().await?;
        self.settle(ticket, Payload::Offers(offers))?;
        Ok(())
    }

    /// Load one offer. A missing offer clears the current one and reports `NotFound`.
    pub async fn load_offer(&self, id: &str) -> Result<()> {
        let ticket = self.begin(Resource::Offer);
        let offer = self.source.fetch_offer(id).await?;
        let found = offer.is_some();
        let applied = self.settle(ticket, Payload::Offer(offer))?;
        if applied && !found {
            return Err(DataError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub async fn load_nearby_offers(&self, id: &str) -> Result<()> {
        let ticket = self.begin(Resource::NearbyOffers);
        let offers = self.source.fetch_nearby_offers(id).await?;
        self.settle(ticket, Payload::NearbyOffers(offers))?;
        Ok(())
    }

    pub async fn load_reviews(&self, id: &str) -> Result<()> {
        let ticket = self.begin(Resource::Reviews);
        let reviews = self.source.fetch_reviews(id).await?;
        self.settle(ticket, Payload::Reviews(reviews))?;
        Ok(())
    }

    /// Everything the offer page needs, fetched concurrently
    pub async fn open_offer(&self, id: &str) -> Result<()> {
        info!("Opening offer {}", id);
        let (offer, nearby, reviews) = tokio::join!(
            self.load_offer(id),
            self.load_nearby_offers(id),
            self.load_reviews(id),
        );
        offer?;
        nearby?;
        reviews
    }

    /// Post a review and show it if the review list it was written against
    /// is still on screen
    pub async fn submit_review(&self, id: &str, draft: &ReviewDraft) -> Result<()> {
        draft.validate()?;
        let ticket = self.store.borrow_mut().begin_review_post();
        let review = self.source.submit_review(id, draft).await?;

        match self.store.borrow_mut().append_review(ticket, id, review) {
            Err(err) if err.is_stale() => {
                debug!("Review for offer {} posted after leaving it", id);
                Ok(())
            }
            other => other,
        }
    }

    /// Mark or unmark an offer; the server's copy replaces the local one
    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<()> {
        let ticket = self.store.borrow_mut().begin_favorite(id);
        let updated = self.source.set_favorite(id, is_favorite).await?;

        match self.store.borrow_mut().apply_favorite(ticket, updated) {
            Err(err) if err.is_stale() => {
                debug!("Superseded favorite toggle for offer {}", id);
                Ok(())
            }
            other => other,
        }
    }

    pub fn leave_offer(&self) {
        self.store.borrow_mut().leave_offer();
    }

    fn begin(&self, resource: Resource) -> Ticket {
        self.store.borrow_mut().begin(resource)
    }

    /// Apply a resolved fetch. `Ok(false)` means it was stale and dropped.
    fn settle(&self, ticket: Ticket, payload: Payload) -> Result<bool> {
        match self.store.borrow_mut().apply(ticket, payload) {
            Ok(()) => Ok(true),
            Err(err) if err.is_stale() => {
                debug!(resource = %ticket.resource, "Discarding stale response");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
