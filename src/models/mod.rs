use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

mod review;

pub use review::{parse_review_date, Review};

/// Map point with the zoom level used to frame it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// City an offer belongs to. `name` is the sole equality key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub name: Cow<'static, str>,
    pub location: Location,
}

impl City {
    pub const fn known(name: &'static str, latitude: f64, longitude: f64, zoom: u8) -> Self {
        Self {
            name: Cow::Borrowed(name),
            location: Location {
                latitude,
                longitude,
                zoom,
            },
        }
    }
}

/// Author of a review, or host of an offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
}

pub type Host = User;

/// Kind of accommodation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Apartment,
    Room,
    House,
    Hotel,
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OfferType::Apartment => "Apartment",
            OfferType::Room => "Private room",
            OfferType::House => "House",
            OfferType::Hotel => "Hotel",
        };
        f.write_str(label)
    }
}

/// Core rental listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OfferType,
    /// Nightly price in euros
    pub price: u32,
    pub city: City,
    pub location: Location,
    pub is_favorite: bool,
    pub is_premium: bool,
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bedrooms: u8,
    #[serde(default)]
    pub goods: Vec<String>,
    pub host: Host,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub max_adults: u8,
    #[serde(default)]
    pub preview_image: String,
}
