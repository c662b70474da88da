use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;
pub const COMMENT_LENGTH: RangeInclusive<usize> = 50..=300;

/// A review as typed by the user, before the server accepts it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewDraft {
    pub comment: String,
    pub rating: u8,
}

impl ReviewDraft {
    pub fn new(rating: u8, comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            rating,
        }
    }

    /// Check the draft against the same rules the server enforces
    pub fn validate(&self) -> Result<()> {
        if !RATING_RANGE.contains(&self.rating) {
            return Err(DataError::Validation(format!(
                "rating must be between {} and {}, got {}",
                RATING_RANGE.start(),
                RATING_RANGE.end(),
                self.rating
            )));
        }

        let length = self.comment.chars().count();
        if !COMMENT_LENGTH.contains(&length) {
            return Err(DataError::Validation(format!(
                "comment must be {} to {} characters, got {}",
                COMMENT_LENGTH.start(),
                COMMENT_LENGTH.end(),
                length
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        assert!(ReviewDraft::new(5, "a".repeat(50)).validate().is_ok());
        assert!(ReviewDraft::new(1, "a".repeat(300)).validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        assert!(ReviewDraft::new(0, "a".repeat(60)).validate().is_err());
        assert!(ReviewDraft::new(6, "a".repeat(60)).validate().is_err());
    }

    #[test]
    fn test_comment_length_counts_chars() {
        assert!(ReviewDraft::new(4, "a".repeat(49)).validate().is_err());
        assert!(ReviewDraft::new(4, "a".repeat(301)).validate().is_err());
        // 50 two-byte chars are still 50 characters
        assert!(ReviewDraft::new(4, "ö".repeat(50)).validate().is_ok());
    }

    #[test]
    fn test_draft_wire_shape() {
        let json = serde_json::to_value(ReviewDraft::new(4, "nice")).unwrap();
        assert_eq!(json, serde_json::json!({ "comment": "nice", "rating": 4 }));
    }
}
