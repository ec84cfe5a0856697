use std::collections::HashMap;

use crate::models::accommodation::{Accommodation, AccommodationType};

/// A curated stay with its price expressed as a fraction of the per-person
/// budget, so one table serves every budget level.
#[derive(Debug, Clone)]
pub struct CuratedStay {
    pub name: &'static str,
    pub kind: AccommodationType,
    pub location: &'static str,
    pub price_factor: f32,
    pub rating: f32,
    pub booking_link: &'static str,
    pub maps_url: &'static str,
}

/// Lodging options per destination. Pure and deterministic: a static curated
/// table when one exists for the destination, otherwise six templated generic
/// entries. The table is injected at construction so the logic can be tested
/// against synthetic data.
pub struct AccommodationCatalog {
    curated: HashMap<&'static str, Vec<CuratedStay>>,
}

impl Default for AccommodationCatalog {
    fn default() -> Self {
        let mut curated = HashMap::new();
        curated.insert(
            "goa",
            vec![
                CuratedStay {
                    name: "Taj Exotica Resort & Spa",
                    kind: AccommodationType::Resort,
                    location: "Benaulim Beach",
                    price_factor: 0.9,
                    rating: 4.8,
                    booking_link: "https://www.tajhotels.com/en-in/taj/taj-exotica-goa/",
                    maps_url: "https://maps.google.com/?q=Taj+Exotica+Goa",
                },
                CuratedStay {
                    name: "Beach Villa Airbnb - Calangute",
                    kind: AccommodationType::Airbnb,
                    location: "Calangute Beach",
                    price_factor: 0.6,
                    rating: 4.6,
                    booking_link: "https://www.airbnb.com/rooms/plus/calangute-beach-villa-goa",
                    maps_url: "https://maps.google.com/?q=Calangute+Beach+Goa",
                },
                CuratedStay {
                    name: "The Leela Goa",
                    kind: AccommodationType::Resort,
                    location: "Cavelossim Beach",
                    price_factor: 0.85,
                    rating: 4.7,
                    booking_link: "https://www.theleela.com/hotels-in-goa/the-leela-goa/",
                    maps_url: "https://maps.google.com/?q=Leela+Goa",
                },
                CuratedStay {
                    name: "Luxury Villa - Anjuna",
                    kind: AccommodationType::Villa,
                    location: "Anjuna",
                    price_factor: 0.7,
                    rating: 4.5,
                    booking_link: "https://www.booking.com/hotel/in/luxury-villa-anjuna-goa.html",
                    maps_url: "https://maps.google.com/?q=Anjuna+Goa",
                },
                CuratedStay {
                    name: "Hotel Park Hyatt Goa",
                    kind: AccommodationType::Hotel,
                    location: "Arossim Beach",
                    price_factor: 0.8,
                    rating: 4.6,
                    booking_link:
                        "https://www.hyatt.com/en-US/hotel/india/park-hyatt-goa-resort-and-spa/goap",
                    maps_url: "https://maps.google.com/?q=Park+Hyatt+Goa",
                },
                CuratedStay {
                    name: "Budget Hotel - Baga",
                    kind: AccommodationType::Hotel,
                    location: "Baga Beach",
                    price_factor: 0.5,
                    rating: 4.2,
                    booking_link: "https://www.booking.com/hotel/in/baga-beach-resort.html",
                    maps_url: "https://maps.google.com/?q=Baga+Beach+Goa",
                },
            ],
        );
        Self { curated }
    }
}

impl AccommodationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_curated(curated: HashMap<&'static str, Vec<CuratedStay>>) -> Self {
        Self { curated }
    }

    /// Ranked lodging options for a destination, priced against the per-person
    /// budget. No network calls, no side effects.
    pub fn get_accommodations(
        &self,
        destination: &str,
        num_people: u32,
        budget: f32,
    ) -> Vec<Accommodation> {
        let per_person_budget = budget / num_people.max(1) as f32;
        let dest = destination.to_lowercase();
        let dest = dest.trim();
        // The primary name before any comma also keys the table, so
        // "Goa, India" matches the "goa" entry.
        let main_dest = dest.split(',').next().unwrap_or(dest).trim();

        let curated = self
            .curated
            .get(dest)
            .or_else(|| self.curated.get(main_dest));

        match curated {
            Some(stays) => stays
                .iter()
                .map(|s| Accommodation {
                    name: s.name.to_string(),
                    kind: s.kind,
                    location: s.location.to_string(),
                    price: per_person_budget * s.price_factor,
                    rating: s.rating,
                    booking_link: s.booking_link.to_string(),
                    maps_url: s.maps_url.to_string(),
                })
                .collect(),
            None => generic_accommodations(destination, per_person_budget),
        }
    }
}

/// Six templated entries spanning the luxury-to-budget range, with booking and
/// map links built from the URL-encoded destination.
fn generic_accommodations(destination: &str, per_person_budget: f32) -> Vec<Accommodation> {
    let dest_name = destination.split(',').next().unwrap_or(destination).trim();
    let encoded: String = url::form_urlencoded::byte_serialize(destination.as_bytes()).collect();
    let booking = format!("https://www.booking.com/searchresults.html?ss={}", encoded);
    let airbnb = format!("https://www.airbnb.com/s/{}", encoded);
    let maps = format!("https://maps.google.com/?q={}", encoded);

    vec![
        Accommodation {
            name: format!("Luxury Hotel - {}", dest_name),
            kind: AccommodationType::Hotel,
            location: "City Center".to_string(),
            price: per_person_budget * 0.9,
            rating: 4.7,
            booking_link: booking.clone(),
            maps_url: maps.clone(),
        },
        Accommodation {
            name: format!("Boutique Hotel - {}", dest_name),
            kind: AccommodationType::Hotel,
            location: "Downtown Area".to_string(),
            price: per_person_budget * 0.75,
            rating: 4.5,
            booking_link: booking.clone(),
            maps_url: maps.clone(),
        },
        Accommodation {
            name: format!("Resort - {}", dest_name),
            kind: AccommodationType::Resort,
            location: "Scenic Location".to_string(),
            price: per_person_budget * 0.8,
            rating: 4.6,
            booking_link: booking.clone(),
            maps_url: format!("https://maps.google.com/?q={}+resort", encoded),
        },
        Accommodation {
            name: format!("Airbnb - {}", dest_name),
            kind: AccommodationType::Airbnb,
            location: "Residential Area".to_string(),
            price: per_person_budget * 0.6,
            rating: 4.4,
            booking_link: airbnb,
            maps_url: maps.clone(),
        },
        Accommodation {
            name: format!("Budget Hotel - {}", dest_name),
            kind: AccommodationType::Hotel,
            location: "City Area".to_string(),
            price: per_person_budget * 0.5,
            rating: 4.2,
            booking_link: booking.clone(),
            maps_url: maps.clone(),
        },
        Accommodation {
            name: format!("Apartment Rental - {}", dest_name),
            kind: AccommodationType::Apartment,
            location: "Central Location".to_string(),
            price: per_person_budget * 0.65,
            rating: 4.3,
            booking_link: booking,
            maps_url: maps,
        },
    ]
}
