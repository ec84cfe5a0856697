use log::info;
use serde::{Deserialize, Serialize};

use crate::models::place::Place;
use crate::services::category_fetchers::{
    fetch_attractions, fetch_parks, fetch_restaurants, fetch_shopping, fetch_viewpoints,
    FetchOutcome, MealType, QueryDiagnostic,
};
use crate::services::city_resolver::CityResolver;
use crate::services::place_search_service::PlaceSearch;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RestaurantOptions {
    pub lunch: Vec<Place>,
    pub dinner: Vec<Place>,
}

/// Consolidated result of one aggregation pass. Always fully shaped: failed
/// or empty categories are empty lists, never a missing section, so
/// downstream code only ever branches on emptiness.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationPlaces {
    pub city: String,
    pub attractions: Vec<Place>,
    pub restaurants: RestaurantOptions,
    pub shopping: Vec<Place>,
    pub parks: Vec<Place>,
    pub viewpoints: Vec<Place>,
}

impl DestinationPlaces {
    pub fn empty(city: &str) -> Self {
        Self {
            city: city.to_string(),
            attractions: Vec::new(),
            restaurants: RestaurantOptions::default(),
            shopping: Vec::new(),
            parks: Vec::new(),
            viewpoints: Vec::new(),
        }
    }

    /// Whether any non-restaurant category holds a real provider record.
    pub fn has_real_data(&self) -> bool {
        !self.attractions.is_empty()
            || !self.parks.is_empty()
            || !self.viewpoints.is_empty()
            || !self.shopping.is_empty()
    }
}

/// Aggregation result plus the per-query diagnostics gathered along the way.
/// Diagnostics are advisory data for debugging surfaces; they never affect
/// control flow.
#[derive(Debug)]
pub struct AggregationOutcome {
    pub places: DestinationPlaces,
    pub diagnostics: Vec<QueryDiagnostic>,
}

/// Run all six category fetchers concurrently for one destination. Each
/// fetcher is individually fault-isolated: a failure inside one category
/// yields an empty list for that category, not a failed aggregation.
pub async fn aggregate<P: PlaceSearch>(
    client: &P,
    resolver: &CityResolver,
    destination: &str,
    moods: &[String],
) -> AggregationOutcome {
    let city = resolver.resolve(Some(client), destination).await;
    info!("aggregating places for \"{}\" (city: {})", destination, city);

    let (attractions, lunch, dinner, shopping, parks, viewpoints) = futures::join!(
        fetch_attractions(client, destination, &city, moods),
        fetch_restaurants(client, destination, &city, MealType::Lunch),
        fetch_restaurants(client, destination, &city, MealType::Dinner),
        fetch_shopping(client, destination, &city),
        fetch_parks(client, destination, &city),
        fetch_viewpoints(client, destination, &city),
    );

    let mut diagnostics = Vec::new();
    let mut collect = |outcome: FetchOutcome| -> Vec<Place> {
        diagnostics.extend(outcome.diagnostics);
        outcome.places
    };

    let places = DestinationPlaces {
        city,
        attractions: collect(attractions),
        restaurants: RestaurantOptions {
            lunch: collect(lunch),
            dinner: collect(dinner),
        },
        shopping: collect(shopping),
        parks: collect(parks),
        viewpoints: collect(viewpoints),
    };

    info!(
        "aggregated {} attractions, {} lunch, {} dinner, {} shopping, {} parks, {} viewpoints ({} failed queries)",
        places.attractions.len(),
        places.restaurants.lunch.len(),
        places.restaurants.dinner.len(),
        places.shopping.len(),
        places.parks.len(),
        places.viewpoints.len(),
        diagnostics.len(),
    );

    AggregationOutcome { places, diagnostics }
}
