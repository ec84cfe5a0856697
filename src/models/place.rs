use serde::{Deserialize, Serialize};

/// Estimated per-person cost for each provider price tier (0-4), in the base
/// currency unit. Tier data is frequently missing, hence the mid-range default.
const TIER_COSTS: [f32; 5] = [0.0, 200.0, 500.0, 1000.0, 2000.0];
const UNKNOWN_TIER_COST: f32 = 300.0;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A point of interest, restaurant, shop, park or viewpoint returned by the
/// place-search provider. Immutable once fetched; never persisted by the core.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Place {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub name: String,
    pub address: String,
    /// Free-form category tags from the provider ("museum", "restaurant", ...).
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,
    /// Provider price tier, 0 (free) to 4 (most expensive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    pub maps_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl Place {
    /// Stable identity used for deduplication and cross-day exclusion. Falls
    /// back to the display name when the provider gave no id; the fallback must
    /// stay consistent for the no-repeat guarantee to hold.
    pub fn identity(&self) -> &str {
        self.place_id.as_deref().unwrap_or(&self.name)
    }

    /// Estimated per-person cost derived from the price tier.
    pub fn estimated_cost(&self) -> f32 {
        match self.price_level {
            Some(tier) if (tier as usize) < TIER_COSTS.len() => TIER_COSTS[tier as usize],
            _ => UNKNOWN_TIER_COST,
        }
    }

    pub fn has_type_matching(&self, keywords: &[&str]) -> bool {
        self.types
            .iter()
            .any(|t| keywords.iter().any(|k| t.contains(k)))
    }
}

/// Deterministic map link for a place the provider returned without one.
pub fn maps_search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://maps.google.com/?q={}", encoded)
}
