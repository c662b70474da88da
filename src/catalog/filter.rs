use crate::models::Offer;

/// Keep offers located in `city_name`, compared byte for byte.
pub fn filter_by_city<'a, I>(offers: I, city_name: &str) -> Vec<&'a Offer>
where
    I: IntoIterator<Item = &'a Offer>,
{
    offers
        .into_iter()
        .filter(|offer| offer.city.name == city_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::offer;
    use proptest::prelude::*;

    #[test]
    fn test_keeps_matching_offers_in_order() {
        let offers = vec![
            offer("1", "Paris", 100, 4.0),
            offer("2", "Cologne", 50, 5.0),
            offer("3", "Paris", 10, 1.0),
        ];
        let ids: Vec<&str> = filter_by_city(&offers, "Paris")
            .iter()
            .map(|offer| offer.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_match_is_exact() {
        let offers = vec![offer("1", "Paris", 100, 4.0)];
        assert!(filter_by_city(&offers, "paris").is_empty());
        assert!(filter_by_city(&offers, " Paris").is_empty());
        assert!(filter_by_city(&offers, "Paris ").is_empty());
    }

    #[test]
    fn test_unknown_city_is_empty_not_an_error() {
        let offers = vec![offer("1", "Paris", 100, 4.0)];
        assert!(filter_by_city(&offers, "Unknown").is_empty());
        assert!(filter_by_city(Vec::<&Offer>::new(), "Paris").is_empty());
    }

    proptest! {
        #[test]
        fn prop_filter_only_keeps_the_city(
            cities in prop::collection::vec(prop::sample::select(vec!["Paris", "Cologne", "Hamburg"]), 0..20),
            target in prop::sample::select(vec!["Paris", "Cologne", "Hamburg", "Unknown"]),
        ) {
            let offers: Vec<Offer> = cities
                .iter()
                .enumerate()
                .map(|(i, city)| offer(&i.to_string(), city, 100, 4.0))
                .collect();
            let kept = filter_by_city(&offers, target);
            prop_assert!(kept.len() <= offers.len());
            prop_assert!(kept.iter().all(|offer| offer.city.name == target));
            prop_assert_eq!(kept.len(), cities.iter().filter(|city| **city == target).count());
        }
    }
}
