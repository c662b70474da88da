use crate::models::City;

/// Cities the catalog can be browsed by, in tab order.
pub static CITIES: [City; 6] = [
    City::known("Paris", 48.85661, 2.351499, 13),
    City::known("Cologne", 50.938361, 6.959974, 13),
    City::known("Brussels", 50.846557, 4.351697, 13),
    City::known("Amsterdam", 52.37454, 4.897976, 13),
    City::known("Hamburg", 53.550341, 10.000654, 13),
    City::known("Dusseldorf", 51.225402, 6.776314, 13),
];

pub static DEFAULT_CITY: &City = &CITIES[0];

/// Look up a known city by exact name
pub fn find_city(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.name == name)
}

/// Known city by exact name, falling back to the default city
pub fn city_or_default(name: &str) -> &'static City {
    find_city(name).unwrap_or(DEFAULT_CITY)
}
