//! Read-only views derived from one `Store` snapshot.
//!
//! Every selector borrows the store, so a view can never mix fields from
//! before and after a mutation.

use super::Store;
use crate::catalog::{
    city_or_default, filter_by_city, merge_with_current, recent_reviews, sort_offers, SortMethod,
    MAX_REVIEWS,
};
use crate::models::{City, Offer, Review};
use serde::Serialize;

/// Which page the map is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapScope {
    Catalog,
    Offer,
}

/// Offers in the selected city, ordered by the selected sort method
pub fn visible_offers(store: &Store) -> Vec<&Offer> {
    let selection = store.selection();
    let in_city = filter_by_city(&store.data().offers, &selection.city);
    sort_offers(in_city, selection.sort)
}

pub fn visible_reviews(store: &Store) -> Vec<&Review> {
    recent_reviews(&store.data().reviews, MAX_REVIEWS)
}

pub fn map_markers(store: &Store, scope: MapScope) -> Vec<&Offer> {
    match scope {
        MapScope::Catalog => visible_offers(store),
        MapScope::Offer => {
            let data = store.data();
            merge_with_current(&data.nearby_offers, data.offer.as_ref())
        }
    }
}

pub fn current_city(store: &Store) -> &'static City {
    city_or_default(&store.selection().city)
}

/// Loaded offers the user has marked as favorite, in fetch order
pub fn favorite_offers(store: &Store) -> Vec<&Offer> {
    store
        .data()
        .offers
        .iter()
        .filter(|offer| offer.is_favorite)
        .collect()
}

/// The highlighted offer, if it is among the visible ones
pub fn active_offer(store: &Store) -> Option<&Offer> {
    let id = store.selection().active_offer.as_deref()?;
    visible_offers(store).into_iter().find(|offer| offer.id == id)
}

/// Heading above the offer list, e.g. "3 places to stay in Amsterdam"
pub fn places_summary(store: &Store) -> String {
    let count = visible_offers(store).len();
    let noun = if count == 1 { "place" } else { "places" };
    format!("{} {} to stay in {}", count, noun, store.selection().city)
}

/// Everything the catalog page renders
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub city: &'static City,
    pub sort: SortMethod,
    pub summary: String,
    pub offers: Vec<&'a Offer>,
    pub active_offer: Option<&'a str>,
}

impl<'a> CatalogView<'a> {
    pub fn from_store(store: &'a Store) -> Self {
        Self {
            city: current_city(store),
            sort: store.selection().sort,
            summary: places_summary(store),
            offers: visible_offers(store),
            active_offer: store.selection().active_offer.as_deref(),
        }
    }

    /// Map markers are the listed offers themselves
    pub fn markers(&self) -> &[&'a Offer] {
        &self.offers
    }
}

/// Everything the offer page renders. `None` until the offer has loaded.
#[derive(Debug, Serialize)]
pub struct OfferPageView<'a> {
    pub offer: &'a Offer,
    /// Always the page's own offer, highlighted among the markers
    pub active_offer: Option<&'a str>,
    pub reviews: Vec<&'a Review>,
    pub review_count: usize,
    pub markers: Vec<&'a Offer>,
    pub neighbourhood: Vec<&'a Offer>,
}

impl<'a> OfferPageView<'a> {
    pub fn from_store(store: &'a Store) -> Option<Self> {
        let offer = store.data().offer.as_ref()?;
        Some(Self {
            offer,
            active_offer: Some(offer.id.as_str()),
            reviews: visible_reviews(store),
            review_count: store.data().reviews.len(),
            markers: map_markers(store, MapScope::Offer),
            neighbourhood: visible_offers(store),
        })
    }
}
