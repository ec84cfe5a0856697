use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum AccommodationType {
    Hotel,
    Resort,
    Villa,
    Airbnb,
    Apartment,
}

/// A lodging option generated fresh per request. `price` is per person, scaled
/// from the per-person budget by the catalog.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Accommodation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccommodationType,
    pub location: String,
    pub price: f32,
    pub rating: f32,
    pub booking_link: String,
    pub maps_url: String,
}
