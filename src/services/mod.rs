pub mod accommodation_catalog;
pub mod area_classifier;
pub mod category_fetchers;
pub mod city_resolver;
pub mod day_planner;
pub mod itinerary_service;
pub mod place_aggregator;
pub mod place_search_service;
pub mod sightseeing_service;
pub mod travel_tips;
