use crate::models::Offer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ranking strategy for the offer list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortMethod {
    /// Fetch order, untouched
    #[default]
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
    TopRatedFirst,
}

impl SortMethod {
    /// Menu order
    pub const ALL: [SortMethod; 4] = [
        SortMethod::Popular,
        SortMethod::PriceLowToHigh,
        SortMethod::PriceHighToLow,
        SortMethod::TopRatedFirst,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortMethod::Popular => "Popular",
            SortMethod::PriceLowToHigh => "Price: low to high",
            SortMethod::PriceHighToLow => "Price: high to low",
            SortMethod::TopRatedFirst => "Top rated first",
        }
    }

    /// Resolve a menu label or variant name. Anything unrecognised is `Popular`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|method| method.label() == label || format!("{:?}", method) == label)
            .unwrap_or_default()
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order offers by `method` into a new vector of borrows.
///
/// `Vec::sort_by` is stable, so offers with equal keys keep their input order.
pub fn sort_offers<'a, I>(offers: I, method: SortMethod) -> Vec<&'a Offer>
where
    I: IntoIterator<Item = &'a Offer>,
{
    let mut sorted: Vec<&Offer> = offers.into_iter().collect();
    match method {
        SortMethod::Popular => {}
        SortMethod::PriceLowToHigh => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMethod::PriceHighToLow => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMethod::TopRatedFirst => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    sorted
}
