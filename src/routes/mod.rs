pub mod accommodation;
pub mod health;
pub mod itinerary;
