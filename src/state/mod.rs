//! The explicit state object that fetches write and selectors read.

mod requests;
pub mod selectors;

pub use requests::{RequestLedger, Resource, Ticket};
pub use selectors::{
    active_offer, current_city, favorite_offers, map_markers, places_summary, visible_offers,
    visible_reviews, CatalogView, MapScope, OfferPageView,
};

use crate::catalog::{SortMethod, DEFAULT_CITY};
use crate::error::{DataError, Result};
use crate::models::{Offer, Review};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the user has picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionState {
    pub city: String,
    pub sort: SortMethod,
    /// Offer highlighted on the map, if any
    pub active_offer: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.name.to_string(),
            sort: SortMethod::default(),
            active_offer: None,
        }
    }
}

/// Last resolved snapshot of each fetched collection
#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub offers: Vec<Offer>,
    pub offer: Option<Offer>,
    pub nearby_offers: Vec<Offer>,
    pub reviews: Vec<Review>,
}

/// A resolved fetch, ready to replace its collection wholesale
#[derive(Debug, Clone)]
pub enum Payload {
    Offers(Vec<Offer>),
    /// `None` when the offer was not found
    Offer(Option<Offer>),
    NearbyOffers(Vec<Offer>),
    Reviews(Vec<Review>),
}

impl Payload {
    pub fn resource(&self) -> Resource {
        match self {
            Payload::Offers(_) => Resource::Offers,
            Payload::Offer(_) => Resource::Offer,
            Payload::NearbyOffers(_) => Resource::NearbyOffers,
            Payload::Reviews(_) => Resource::Reviews,
        }
    }
}

/// Selection, fetched data and in-flight request identities
#[derive(Debug, Default)]
pub struct Store {
    selection: SelectionState,
    data: DataState,
    requests: RequestLedger,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: SelectionState) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn data(&self) -> &DataState {
        &self.data
    }

    pub fn select_city(&mut self, name: impl Into<String>) {
        self.selection.city = name.into();
        debug!(city = %self.selection.city, "City selected");
    }

    pub fn select_sort(&mut self, method: SortMethod) {
        self.selection.sort = method;
        debug!(sort = %method, "Sort method selected");
    }

    pub fn set_active_offer(&mut self, id: Option<String>) {
        self.selection.active_offer = id;
    }

    /// Register a new request for `resource`, superseding any in flight
    pub fn begin(&mut self, resource: Resource) -> Ticket {
        self.requests.issue(resource)
    }

    /// Register a favorite toggle for one offer. Toggles of other offers are unaffected.
    pub fn begin_favorite(&mut self, offer_id: &str) -> Ticket {
        self.requests.issue_scoped(Resource::Favorite, offer_id)
    }

    /// Ticket for a review post: goes stale once the review list is refetched
    /// or the offer page is left, without cancelling a fetch already running.
    pub fn begin_review_post(&mut self) -> Ticket {
        self.requests.watch(Resource::Reviews)
    }

    /// Replace the collection named by `payload` if `ticket` is still current
    pub fn apply(&mut self, ticket: Ticket, payload: Payload) -> Result<()> {
        let resource = payload.resource();
        if ticket.resource != resource || !self.requests.is_current(ticket) {
            return Err(DataError::StaleResponse(resource));
        }

        match payload {
            Payload::Offers(offers) => {
                debug!(count = offers.len(), "Offers replaced");
                self.data.offers = offers;
            }
            Payload::Offer(offer) => {
                debug!(found = offer.is_some(), "Current offer replaced");
                self.data.offer = offer;
            }
            Payload::NearbyOffers(offers) => {
                debug!(count = offers.len(), "Nearby offers replaced");
                self.data.nearby_offers = offers;
            }
            Payload::Reviews(reviews) => {
                debug!(count = reviews.len(), "Reviews replaced");
                self.data.reviews = reviews;
            }
        }
        Ok(())
    }

    /// Swap in the updated snapshot of one offer wherever it appears
    pub fn apply_favorite(&mut self, ticket: Ticket, updated: Offer) -> Result<()> {
        if ticket.resource != Resource::Favorite
            || !self.requests.is_current_scoped(ticket, &updated.id)
        {
            return Err(DataError::StaleResponse(Resource::Favorite));
        }

        debug!(offer = %updated.id, is_favorite = updated.is_favorite, "Favorite status replaced");
        self.data.offers = replace_offer(&self.data.offers, &updated);
        self.data.nearby_offers = replace_offer(&self.data.nearby_offers, &updated);
        if self.data.offer.as_ref().is_some_and(|offer| offer.id == updated.id) {
            self.data.offer = Some(updated);
        }
        Ok(())
    }

    /// Add a freshly posted review if the review list it was posted against
    /// is still the one on screen
    pub fn append_review(&mut self, ticket: Ticket, offer_id: &str, review: Review) -> Result<()> {
        let on_screen = self.data.offer.as_ref().map(|offer| offer.id.as_str());
        if ticket.resource != Resource::Reviews
            || !self.requests.is_current(ticket)
            || on_screen != Some(offer_id)
        {
            return Err(DataError::StaleResponse(Resource::Reviews));
        }

        let mut reviews = Vec::with_capacity(self.data.reviews.len() + 1);
        reviews.extend(self.data.reviews.iter().cloned());
        reviews.push(review);
        self.data.reviews = reviews;
        Ok(())
    }

    /// Drop offer-page data and orphan any fetch still running for it
    pub fn leave_offer(&mut self) {
        for resource in [Resource::Offer, Resource::NearbyOffers, Resource::Reviews] {
            self.requests.invalidate(resource);
        }
        self.data.offer = None;
        self.data.nearby_offers = Vec::new();
        self.data.reviews = Vec::new();
        self.selection.active_offer = None;
    }
}

fn replace_offer(offers: &[Offer], updated: &Offer) -> Vec<Offer> {
    offers
        .iter()
        .map(|offer| {
            if offer.id == updated.id {
                updated.clone()
            } else {
                offer.clone()
            }
        })
        .collect()
}
