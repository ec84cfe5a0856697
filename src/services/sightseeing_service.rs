use serde::{Deserialize, Serialize};

use crate::models::place::{maps_search_url, Place};
use crate::services::place_aggregator::DestinationPlaces;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Cultural,
    Nature,
    Entertainment,
    Shopping,
    Sightseeing,
}

/// One entry of the activity pool the day planner draws from: a provider
/// place (or a generic fallback) with its inferred kind, mood tags and cost.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ActivityOption {
    pub identity: String,
    pub name: String,
    pub kind: ActivityKind,
    pub cost: f32,
    pub description: String,
    pub maps_url: String,
    pub moods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

fn kind_for(place: &Place) -> ActivityKind {
    if place.has_type_matching(&["museum", "church", "place_of_worship", "temple"]) {
        ActivityKind::Cultural
    } else if place.has_type_matching(&["park", "garden"]) {
        ActivityKind::Nature
    } else if place.has_type_matching(&["entertainment", "night_club", "bar"]) {
        ActivityKind::Entertainment
    } else {
        ActivityKind::Sightseeing
    }
}

fn moods_for(place: &Place) -> Vec<String> {
    let mut moods = Vec::new();
    if place.has_type_matching(&["museum", "church", "temple", "place_of_worship"]) {
        moods.push("cultural".to_string());
        moods.push("historical".to_string());
    }
    if place.has_type_matching(&["park", "garden", "beach", "natural_feature"]) {
        moods.push("relaxing".to_string());
        moods.push("nature".to_string());
    }
    if place.has_type_matching(&["shopping", "entertainment", "night_club", "bar"]) {
        moods.push("social".to_string());
    }
    if moods.is_empty() {
        moods.push("cultural".to_string());
        moods.push("urban".to_string());
    }
    moods
}

fn description_for(place: &Place) -> String {
    if place.address.is_empty() {
        format!("Visit {}", place.name)
    } else {
        place.address.clone()
    }
}

fn option_from(place: &Place, kind: ActivityKind, moods: Vec<String>, cost: f32) -> ActivityOption {
    ActivityOption {
        identity: place.identity().to_string(),
        name: place.name.clone(),
        kind,
        cost,
        description: description_for(place),
        maps_url: place.maps_url.clone(),
        moods,
        rating: place.rating,
    }
}

/// Flatten an aggregation result into the planner's activity pool:
/// attractions first (their order drives the day-offset selection), then
/// parks, viewpoints and shopping. Parks and viewpoints are free to visit;
/// attractions and shopping carry their tier-derived cost.
pub fn collect_options(places: &DestinationPlaces) -> Vec<ActivityOption> {
    let mut options = Vec::new();

    for place in &places.attractions {
        options.push(option_from(
            place,
            kind_for(place),
            moods_for(place),
            place.estimated_cost(),
        ));
    }
    for place in &places.parks {
        options.push(option_from(
            place,
            ActivityKind::Nature,
            vec!["relaxing".to_string(), "nature".to_string()],
            0.0,
        ));
    }
    for place in &places.viewpoints {
        options.push(option_from(
            place,
            ActivityKind::Sightseeing,
            vec!["relaxing".to_string(), "nature".to_string()],
            0.0,
        ));
    }
    for place in &places.shopping {
        options.push(option_from(
            place,
            ActivityKind::Shopping,
            vec!["social".to_string(), "shopping".to_string()],
            place.estimated_cost(),
        ));
    }

    options
}

/// Mood filter over the pool. A filter that would remove everything returns
/// the pool unchanged: an itinerary with off-mood places beats an empty one.
pub fn filter_by_mood(options: Vec<ActivityOption>, moods: &[String]) -> Vec<ActivityOption> {
    if moods.is_empty() {
        return options;
    }

    let filtered: Vec<ActivityOption> = options
        .iter()
        .filter(|opt| moods.iter().any(|mood| option_matches_mood(opt, mood)))
        .cloned()
        .collect();

    if filtered.is_empty() {
        options
    } else {
        filtered
    }
}

fn option_matches_mood(option: &ActivityOption, mood: &str) -> bool {
    let mood = mood.to_lowercase();
    if option
        .moods
        .iter()
        .any(|m| m.contains(&mood) || mood.contains(m.as_str()))
    {
        return true;
    }

    let name = option.name.to_lowercase();
    let keywords: &[&str] = match mood.as_str() {
        "social" => &["club", "bar", "nightlife"],
        "food" => &["restaurant", "cafe", "bar", "food"],
        "nature" => &["beach", "park", "sanctuary", "waterfall"],
        "cultural" => &["museum", "temple", "church", "fort"],
        _ => &[],
    };
    keywords.iter().any(|k| name.contains(k))
}

fn generic_option(label: &str, kind: ActivityKind, moods: &[&str], city: &str, query: &str) -> ActivityOption {
    let name = format!("{} - {}", label, city);
    ActivityOption {
        identity: name.clone(),
        name,
        kind,
        cost: 0.0,
        description: format!(
            "Explore {} in {}. Use the map link to find specific places.",
            label.to_lowercase(),
            city
        ),
        maps_url: maps_search_url(&format!("{} {}", city, query)),
        moods: moods.iter().map(|m| m.to_string()).collect(),
        rating: None,
    }
}

/// Offline fallback: category-labeled generic activities whose only concrete
/// payload is a category-search map link. No venue names are fabricated.
pub fn fallback_activities(city: &str, moods: &[String]) -> Vec<ActivityOption> {
    let mut activities = Vec::new();
    let has = |keyword: &str| moods.iter().any(|m| m.to_lowercase().contains(keyword));

    if has("cultural") {
        activities.push(generic_option(
            "Historical Sites",
            ActivityKind::Cultural,
            &["cultural", "historical"],
            city,
            "historical sites",
        ));
        activities.push(generic_option(
            "Museums",
            ActivityKind::Cultural,
            &["cultural"],
            city,
            "museums",
        ));
        activities.push(generic_option(
            "Churches & Temples",
            ActivityKind::Cultural,
            &["cultural"],
            city,
            "churches",
        ));
    }

    if has("social") {
        activities.push(generic_option(
            "Shopping Malls",
            ActivityKind::Shopping,
            &["social", "shopping"],
            city,
            "shopping malls",
        ));
        activities.push(generic_option(
            "Entertainment Areas",
            ActivityKind::Entertainment,
            &["social"],
            city,
            "entertainment",
        ));
        activities.push(generic_option(
            "Popular Places",
            ActivityKind::Sightseeing,
            &["social", "urban"],
            city,
            "popular places",
        ));
    }

    if has("nature") || has("relax") {
        activities.push(generic_option(
            "Parks",
            ActivityKind::Nature,
            &["relaxing", "nature"],
            city,
            "parks",
        ));
        activities.push(generic_option(
            "Scenic Viewpoints",
            ActivityKind::Sightseeing,
            &["relaxing", "nature"],
            city,
            "viewpoints",
        ));
    }

    if activities.is_empty() {
        activities.push(generic_option(
            "Tourist Attractions",
            ActivityKind::Sightseeing,
            &["cultural", "urban"],
            city,
            "tourist attractions",
        ));
        activities.push(generic_option(
            "Must Visit Places",
            ActivityKind::Sightseeing,
            &["cultural"],
            city,
            "must visit",
        ));
    }

    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::place_aggregator::RestaurantOptions;

    fn place(id: &str, name: &str, types: &[&str], price_level: Option<u8>) -> Place {
        Place {
            place_id: Some(id.to_string()),
            name: name.to_string(),
            address: format!("{}, Goa", name),
            types: types.iter().map(|t| t.to_string()).collect(),
            rating: Some(4.2),
            rating_count: Some(300),
            price_level,
            maps_url: maps_search_url(name),
            location: None,
        }
    }

    fn sample_places() -> DestinationPlaces {
        DestinationPlaces {
            city: "Goa".to_string(),
            attractions: vec![
                place("a1", "Goa State Museum", &["museum"], Some(1)),
                place("a2", "Tito's Club", &["night_club"], Some(3)),
            ],
            restaurants: RestaurantOptions::default(),
            shopping: vec![place("s1", "Mapusa Market", &["market"], None)],
            parks: vec![place("p1", "Salim Ali Bird Sanctuary", &["park"], None)],
            viewpoints: vec![place("v1", "Chapora Fort", &["point_of_interest"], None)],
        }
    }

    #[test]
    fn pool_orders_attractions_first_and_zeroes_park_costs() {
        let options = collect_options(&sample_places());
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].name, "Goa State Museum");
        assert_eq!(options[0].kind, ActivityKind::Cultural);
        assert_eq!(options[0].cost, 200.0);
        let park = options.iter().find(|o| o.name.contains("Salim Ali")).unwrap();
        assert_eq!(park.cost, 0.0);
        let view = options.iter().find(|o| o.name.contains("Chapora")).unwrap();
        assert_eq!(view.cost, 0.0);
    }

    #[test]
    fn mood_filter_keeps_matching_options() {
        let options = collect_options(&sample_places());
        let cultural = filter_by_mood(options, &["cultural".to_string()]);
        assert!(cultural.iter().any(|o| o.name == "Goa State Museum"));
        assert!(!cultural.iter().any(|o| o.name.contains("Salim Ali")));
    }

    #[test]
    fn mood_filter_never_empties_the_pool() {
        let options = collect_options(&sample_places());
        let total = options.len();
        let filtered = filter_by_mood(options, &["spacefaring".to_string()]);
        assert_eq!(filtered.len(), total);
    }

    #[test]
    fn social_mood_matches_club_by_name() {
        let options = collect_options(&sample_places());
        let social = filter_by_mood(options, &["social".to_string()]);
        assert!(social.iter().any(|o| o.name == "Tito's Club"));
    }

    #[test]
    fn fallback_uses_category_labels_only() {
        let activities = fallback_activities("Goa", &["relaxing".to_string()]);
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].name, "Parks - Goa");
        assert_eq!(activities[1].name, "Scenic Viewpoints - Goa");
        assert!(activities[0].maps_url.contains("maps.google.com"));
        assert!(activities.iter().all(|a| a.cost == 0.0));
    }

    #[test]
    fn fallback_defaults_when_no_mood_matches() {
        let activities = fallback_activities("Goa", &[]);
        assert_eq!(activities[0].name, "Tourist Attractions - Goa");
        assert_eq!(activities.len(), 2);
    }
}
