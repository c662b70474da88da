use crate::models::Offer;

/// Nearby offers followed by the current offer, for the offer page map.
///
/// No dedup by id: the current offer is always the last marker drawn, even
/// when the nearby list already contains it.
pub fn merge_with_current<'a, I>(nearby: I, current: Option<&'a Offer>) -> Vec<&'a Offer>
where
    I: IntoIterator<Item = &'a Offer>,
{
    nearby.into_iter().chain(current).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::offer;
    use proptest::prelude::*;

    #[test]
    fn test_current_is_appended_last() {
        let nearby = vec![offer("6", "Paris", 80, 4.0), offer("7", "Paris", 90, 4.5)];
        let current = offer("5", "Paris", 100, 4.0);
        let ids: Vec<&str> = merge_with_current(&nearby, Some(&current))
            .iter()
            .map(|offer| offer.id.as_str())
            .collect();
        assert_eq!(ids, ["6", "7", "5"]);
    }

    #[test]
    fn test_overlap_keeps_duplicate_marker() {
        let nearby = vec![offer("5", "Paris", 100, 4.0), offer("6", "Paris", 80, 4.0)];
        let current = offer("5", "Paris", 100, 4.0);
        let ids: Vec<&str> = merge_with_current(&nearby, Some(&current))
            .iter()
            .map(|offer| offer.id.as_str())
            .collect();
        assert_eq!(ids, ["5", "6", "5"]);
    }

    #[test]
    fn test_without_current_is_nearby_only() {
        let nearby = vec![offer("6", "Paris", 80, 4.0)];
        assert_eq!(merge_with_current(&nearby, None).len(), 1);
        assert!(merge_with_current(Vec::<&Offer>::new(), None).is_empty());
    }

    proptest! {
        #[test]
        fn prop_merge_length_and_last(count in 0usize..10, with_current in any::<bool>()) {
            let nearby: Vec<Offer> = (0..count)
                .map(|i| offer(&i.to_string(), "Paris", 100, 4.0))
                .collect();
            let current = offer("current", "Paris", 100, 4.0);
            let current_ref = with_current.then_some(&current);

            let merged = merge_with_current(&nearby, current_ref);
            prop_assert_eq!(merged.len(), count + usize::from(with_current));
            if with_current {
                prop_assert_eq!(merged.last().map(|o| o.id.as_str()), Some("current"));
            }
        }
    }
}
