pub mod accommodation;
pub mod itinerary;
pub mod place;
