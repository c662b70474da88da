use super::User;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A guest review. The owning offer is implied by the fetch that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub user: User,
    pub rating: f64,
    pub comment: String,
    #[serde(with = "review_date")]
    pub date: NaiveDate,
}

/// Parse a review date, keeping only the calendar day.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, which is
/// normalised to UTC before the time of day is dropped.
pub fn parse_review_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
    })
}

mod review_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_review_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid review date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_review_date_drops_time_of_day() {
        let expected = NaiveDate::from_ymd_opt(2019, 5, 8).unwrap();
        assert_eq!(parse_review_date("2019-05-08"), Some(expected));
        assert_eq!(parse_review_date("2019-05-08T14:13:56.569Z"), Some(expected));
        assert_eq!(parse_review_date("2019-05-08T23:30:00-02:00"), expected.succ_opt());
        assert_eq!(parse_review_date("yesterday"), None);
    }

    #[test]
    fn test_review_decodes_timestamp_and_encodes_date() {
        let payload = json!({
            "id": "b67ddfd5-b953-4a30-8c8d-bd083cd6b62a",
            "date": "2019-05-08T14:13:56.569Z",
            "user": { "name": "Oliver Conner", "avatarUrl": "https://url-to-image/image.png", "isPro": false },
            "comment": "A quiet cozy and picturesque that hides behind a a river by the unique lightness of Amsterdam.",
            "rating": 4
        });

        let review: Review = serde_json::from_value(payload).unwrap();
        assert_eq!(review.date, NaiveDate::from_ymd_opt(2019, 5, 8).unwrap());
        assert_eq!(review.rating, 4.0);

        let encoded = serde_json::to_value(&review).unwrap();
        assert_eq!(encoded["date"], "2019-05-08");
    }

    #[test]
    fn test_review_rejects_garbage_date() {
        let payload = json!({
            "id": "1",
            "date": "not a date",
            "user": { "name": "Max", "avatarUrl": "", "isPro": false },
            "comment": "",
            "rating": 3
        });
        assert!(serde_json::from_value::<Review>(payload).is_err());
    }
}
