use crate::models::Review;

/// How many reviews the offer page shows
pub const MAX_REVIEWS: usize = 10;

/// Take the last `limit` reviews in fetch order, newest first.
///
/// The window is cut before sorting, so a review outside the last `limit`
/// fetched never shows up even if its date is newer. Same-day reviews keep
/// their fetch order.
pub fn recent_reviews(reviews: &[Review], limit: usize) -> Vec<&Review> {
    let start = reviews.len().saturating_sub(limit);
    let mut window: Vec<&Review> = reviews[start..].iter().collect();
    window.sort_by(|a, b| b.date.cmp(&a.date));
    window
}
