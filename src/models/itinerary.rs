use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::accommodation::Accommodation;

/// Validated inputs for one itinerary build. `days` is the inclusive day count
/// between the dates as computed by the caller; the engine consumes it as-is.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryFilters {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub num_people: u32,
    pub budget: f32,
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SectionTitle {
    Morning,
    Lunch,
    Afternoon,
    Dinner,
    Evening,
}

impl SectionTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTitle::Morning => "Morning",
            SectionTitle::Lunch => "Lunch",
            SectionTitle::Afternoon => "Afternoon",
            SectionTitle::Dinner => "Dinner",
            SectionTitle::Evening => "Evening",
        }
    }
}

/// Snapshot of a place as planned into a section. A copy, not a reference:
/// later mutation of the source never affects an assembled day.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlannedPlace {
    pub name: String,
    pub description: String,
    pub cost: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Section {
    pub title: SectionTitle,
    pub places: Vec<PlannedPlace>,
    pub total_cost: f32,
}

impl Section {
    pub fn new(title: SectionTitle, places: Vec<PlannedPlace>) -> Self {
        let total_cost = places.iter().map(|p| p.cost).sum();
        Self {
            title,
            places,
            total_cost,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayPlan {
    pub day: u32,
    pub date: NaiveDate,
    pub sections: Vec<Section>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CostBreakdown {
    pub accommodation: f32,
    pub food: f32,
    pub activities: f32,
    pub local_travel: f32,
    pub misc: f32,
    pub total: f32,
    pub per_person: f32,
}

/// The assembled itinerary. Plain serializable data; the calling layer may
/// persist it verbatim.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub id: Uuid,
    pub destination: String,
    pub main_city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub num_people: u32,
    pub budget: f32,
    pub per_person_budget: f32,
    pub currency: String,
    pub moods: Vec<String>,
    pub accommodations: Vec<Accommodation>,
    pub days_plan: Vec<DayPlan>,
    pub cost_breakdown: CostBreakdown,
    pub money_saving_tips: Vec<String>,
}

/// Currency code to display symbol. Unrecognized codes fall back to the
/// default market currency.
pub fn currency_symbol(code: &str) -> &'static str {
    match code.to_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        "INR" => "\u{20b9}",
        _ => "\u{20b9}",
    }
}
