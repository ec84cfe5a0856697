use log::{info, warn};
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::services::place_search_service::PlaceSearch;

/// Countries and regions mapped to the primary city used for place queries.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("philippines", "Manila"),
    ("palawan", "Palawan"),
    ("thailand", "Bangkok"),
    ("singapore", "Singapore"),
    ("malaysia", "Kuala Lumpur"),
    ("indonesia", "Jakarta"),
    ("japan", "Tokyo"),
    ("vietnam", "Ho Chi Minh City"),
    ("australia", "Sydney"),
    ("france", "Paris"),
    ("italy", "Rome"),
    ("spain", "Barcelona"),
    ("united kingdom", "London"),
    ("uk", "London"),
    ("usa", "New York"),
    ("canada", "Toronto"),
    ("dubai", "Dubai"),
    ("uae", "Dubai"),
    ("india", "Mumbai"),
    ("goa", "Goa"),
    ("rajasthan", "Rajasthan"),
    ("mumbai", "Mumbai"),
    ("pune", "Pune"),
    ("delhi", "Delhi"),
    ("bangalore", "Bangalore"),
    ("kerala", "Kochi"),
    ("lonavala", "Lonavala"),
];

/// Inputs that are already specific cities. Kept separate from the alias table
/// so the airport lookup cannot re-map them to a nearby city.
const DEFAULT_KNOWN_CITIES: &[&str] = &[
    "goa",
    "pune",
    "mumbai",
    "delhi",
    "bangalore",
    "hyderabad",
    "chennai",
    "kolkata",
    "kerala",
    "lonavala",
];

/// Maps a free-text destination (city, country or region) to one canonical
/// main city. Lookup tables are injected so the same logic runs against
/// synthetic tables in tests.
pub struct CityResolver {
    aliases: HashMap<String, String>,
    known_cities: HashSet<String>,
    city_from_address: Regex,
}

impl Default for CityResolver {
    fn default() -> Self {
        Self::with_tables(
            DEFAULT_ALIASES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            DEFAULT_KNOWN_CITIES.iter().map(|c| c.to_string()).collect(),
        )
    }
}

impl CityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(aliases: HashMap<String, String>, known_cities: HashSet<String>) -> Self {
        Self {
            aliases,
            known_cities,
            city_from_address: Regex::new(r"^([^,]+),").unwrap(),
        }
    }

    /// Resolve the main city for a destination. Never fails: any collaborator
    /// failure degrades to echoing the destination back.
    pub async fn resolve<P: PlaceSearch>(&self, client: Option<&P>, destination: &str) -> String {
        let normalized = destination.trim().to_lowercase();

        if let Some(city) = self.aliases.get(&normalized) {
            info!("city alias: \"{}\" -> \"{}\"", destination, city);
            return city.clone();
        }

        if self.known_cities.contains(&normalized) {
            return title_case(destination.trim());
        }

        if let Some(client) = client {
            let query = format!("{} airport", destination.trim());
            match client.text_search(&query, 1).await {
                Ok(places) => {
                    if let Some(first) = places.first() {
                        if let Some(city) = self.city_from_airport_address(&first.address) {
                            info!("city detected: \"{}\" -> \"{}\"", destination, city);
                            return city;
                        }
                    }
                }
                Err(e) => {
                    warn!("airport lookup failed for \"{}\": {}", destination, e);
                }
            }
        }

        destination.trim().to_string()
    }

    fn city_from_airport_address(&self, address: &str) -> Option<String> {
        self.city_from_address
            .captures(address)
            .map(|caps| caps[1].trim().to_string())
            .filter(|c| !c.is_empty())
    }
}

pub fn title_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::{maps_search_url, Place};
    use crate::services::place_search_service::{PlaceSearchError, PlaceSearch};

    struct StubSearch {
        address: Option<String>,
        fail: bool,
    }

    impl PlaceSearch for StubSearch {
        async fn text_search(
            &self,
            _query: &str,
            _max_results: usize,
        ) -> Result<Vec<Place>, PlaceSearchError> {
            if self.fail {
                return Err(PlaceSearchError::ProviderStatus {
                    status: "REQUEST_DENIED".to_string(),
                    message: "key rejected".to_string(),
                });
            }
            Ok(self
                .address
                .iter()
                .map(|addr| Place {
                    place_id: Some("airport-1".to_string()),
                    name: "International Airport".to_string(),
                    address: addr.clone(),
                    types: vec!["airport".to_string()],
                    rating: None,
                    rating_count: None,
                    price_level: None,
                    maps_url: maps_search_url("airport"),
                    location: None,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn alias_table_short_circuits() {
        let resolver = CityResolver::new();
        let client: Option<&StubSearch> = None;
        assert_eq!(resolver.resolve(client, "thailand").await, "Bangkok");
        assert_eq!(resolver.resolve(client, "Thailand").await, "Bangkok");
    }

    #[tokio::test]
    async fn resolution_is_idempotent_across_casing() {
        let resolver = CityResolver::new();
        let client: Option<&StubSearch> = None;
        let a = resolver.resolve(client, "Goa").await;
        let b = resolver.resolve(client, "goa").await;
        let c = resolver.resolve(client, " GOA ").await;
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, "Goa");
    }

    #[tokio::test]
    async fn airport_lookup_parses_first_address_segment() {
        let resolver = CityResolver::with_tables(HashMap::new(), HashSet::new());
        let stub = StubSearch {
            address: Some("Reykjavik, Capital Region, Iceland".to_string()),
            fail: false,
        };
        assert_eq!(resolver.resolve(Some(&stub), "Iceland").await, "Reykjavik");
    }

    #[tokio::test]
    async fn lookup_failure_echoes_destination() {
        let resolver = CityResolver::with_tables(HashMap::new(), HashSet::new());
        let stub = StubSearch {
            address: None,
            fail: true,
        };
        assert_eq!(resolver.resolve(Some(&stub), "Faroe Islands").await, "Faroe Islands");
    }

    #[test]
    fn no_client_echoes_destination() {
        let resolver = CityResolver::with_tables(HashMap::new(), HashSet::new());
        let client: Option<&StubSearch> = None;
        let city = tokio_test::block_on(resolver.resolve(client, "Tbilisi"));
        assert_eq!(city, "Tbilisi");
    }
}
