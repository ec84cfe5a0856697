use std::collections::HashSet;

use crate::models::itinerary::{PlannedPlace, Section, SectionTitle};
use crate::models::place::{maps_search_url, Place};
use crate::services::area_classifier::{classifier_for, AreaClassifier};
use crate::services::place_aggregator::RestaurantOptions;
use crate::services::sightseeing_service::{filter_by_mood, ActivityKind, ActivityOption};

const BREAKFAST_COST: f32 = 250.0;
const FIRST_DAY_LUNCH_COST: f32 = 250.0;
const LUNCH_COST: f32 = 350.0;
const DINNER_COST: f32 = 400.0;
const MAX_PLACES_PER_SECTION: usize = 6;

/// Day position within the trip. A pure dispatch key: the planner has no
/// internal transitions, but the section template differs per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    First,
    Middle,
    Last,
}

impl DayType {
    pub fn for_position(day_index: usize, total_days: usize) -> Self {
        if day_index == 0 {
            DayType::First
        } else if day_index + 1 == total_days {
            DayType::Last
        } else {
            DayType::Middle
        }
    }
}

/// Place identities consumed so far in one itinerary build. Keyed by provider
/// id plus display name as a defensive fallback, matching `Place::identity`.
/// Scoped to a single build; exactly one writer (the sequential day loop).
#[derive(Debug, Default)]
pub struct UsedPlaces(HashSet<String>);

impl UsedPlaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn has_option(&self, option: &ActivityOption) -> bool {
        self.0.contains(&option.identity) || self.0.contains(&option.name)
    }

    fn mark_option(&mut self, option: &ActivityOption) {
        self.0.insert(option.identity.clone());
        self.0.insert(option.name.clone());
    }

    fn has_place(&self, place: &Place) -> bool {
        self.0.contains(place.identity()) || self.0.contains(&place.name)
    }

    fn mark_place(&mut self, place: &Place) {
        self.0.insert(place.identity().to_string());
        self.0.insert(place.name.clone());
    }
}

/// Reproducible per-day ordering key: a character-sum hash offset by a
/// day-derived seed. Varies the selection across days without randomness, so
/// the same destination and day always plan the same way.
pub fn seeded_sort_key(identity: &str, day_index: usize) -> u32 {
    let hash: u32 = identity.chars().map(|c| c as u32).fold(0, u32::wrapping_add);
    let seed = day_index as u32 * 7 + 13;
    hash.wrapping_add(seed) % 1000
}

/// The scheduling core: emits one structured day plan per call, guaranteeing
/// that no place repeats across days and that every section ends non-empty.
pub struct DayPlanner {
    city: String,
    moods: Vec<String>,
    total_days: usize,
    classifier: Option<Box<dyn AreaClassifier + Send + Sync>>,
}

impl DayPlanner {
    pub fn new(destination: &str, city: &str, moods: &[String], total_days: u32) -> Self {
        Self {
            city: city.to_string(),
            moods: moods.to_vec(),
            total_days: total_days.max(1) as usize,
            classifier: classifier_for(destination)
                .map(|c| Box::new(c) as Box<dyn AreaClassifier + Send + Sync>),
        }
    }

    /// Plan one day. `pool` is the shared activity pool (real places, or
    /// generic fallbacks on the offline path); `used` threads across the
    /// sequential day loop and must be committed before the next day runs.
    pub fn plan_day(
        &self,
        day_index: usize,
        pool: &[ActivityOption],
        restaurants: &RestaurantOptions,
        used: &mut UsedPlaces,
    ) -> Vec<Section> {
        match DayType::for_position(day_index, self.total_days) {
            DayType::First => self.plan_first_day(day_index, pool, restaurants, used),
            DayType::Middle => self.plan_middle_day(day_index, pool, restaurants, used),
            DayType::Last => self.plan_last_day(day_index, pool, restaurants, used),
        }
    }

    fn plan_first_day(
        &self,
        day_index: usize,
        pool: &[ActivityOption],
        restaurants: &RestaurantOptions,
        used: &mut UsedPlaces,
    ) -> Vec<Section> {
        let mut sections = Vec::new();

        sections.push(Section::new(
            SectionTitle::Morning,
            vec![
                PlannedPlace {
                    name: format!("Arrive {}", self.city),
                    description: format!("{} airport", self.city),
                    cost: 0.0,
                    maps_url: Some(maps_search_url(&format!("{} airport", self.city))),
                },
                PlannedPlace {
                    name: "Check-in at accommodation".to_string(),
                    description: "Accommodation".to_string(),
                    cost: 0.0,
                    maps_url: None,
                },
            ],
        ));

        sections.push(Section::new(
            SectionTitle::Lunch,
            self.pick_restaurants(
                &restaurants.lunch,
                day_index,
                FIRST_DAY_LUNCH_COST,
                2,
                false,
                used,
            ),
        ));

        // A batch of attractions, area-grouped where the destination supports
        // it, preferring places no earlier day has claimed.
        let mut day_places = self.places_for_day(pool, day_index);
        day_places.retain(|o| !used.has_option(o));

        if day_places.len() < 3 {
            let unused: Vec<ActivityOption> = pool
                .iter()
                .filter(|o| !used.has_option(o) && !day_places.iter().any(|d| d.identity == o.identity))
                .cloned()
                .collect();
            let remaining_days = self.total_days - day_index;
            let per_day = (unused.len() + remaining_days - 1) / remaining_days;
            day_places.extend(unused.into_iter().take(per_day.max(3)));
            day_places.truncate(MAX_PLACES_PER_SECTION);
        }

        let day_places = filter_by_mood(day_places, &self.moods);

        let mut afternoon = Vec::new();
        for option in day_places.iter().take(MAX_PLACES_PER_SECTION) {
            if !used.has_option(option) {
                used.mark_option(option);
                afternoon.push(planned_from_option(option));
            }
        }
        if afternoon.is_empty() {
            afternoon = self.afternoon_fallback(pool);
        }
        sections.push(Section::new(SectionTitle::Afternoon, afternoon));

        sections.push(Section::new(
            SectionTitle::Dinner,
            self.pick_restaurants(&restaurants.dinner, day_index, DINNER_COST, 0, false, used),
        ));

        sections
    }

    fn plan_middle_day(
        &self,
        day_index: usize,
        pool: &[ActivityOption],
        restaurants: &RestaurantOptions,
        used: &mut UsedPlaces,
    ) -> Vec<Section> {
        let mut sections = Vec::new();

        sections.push(self.breakfast_section());

        let offset = day_index * 2;
        sections.push(Section::new(
            SectionTitle::Morning,
            self.offset_places(pool, offset, 2, used),
        ));

        sections.push(Section::new(
            SectionTitle::Lunch,
            self.pick_restaurants(&restaurants.lunch, day_index, LUNCH_COST, 2, true, used),
        ));

        sections.push(Section::new(
            SectionTitle::Afternoon,
            self.offset_places(pool, offset + 2, 2, used),
        ));

        sections.push(Section::new(
            SectionTitle::Evening,
            self.evening_places(day_index, pool, restaurants, used),
        ));

        sections
    }

    fn plan_last_day(
        &self,
        day_index: usize,
        pool: &[ActivityOption],
        restaurants: &RestaurantOptions,
        used: &mut UsedPlaces,
    ) -> Vec<Section> {
        let mut sections = Vec::new();

        sections.push(self.breakfast_section());

        // Whatever is left unvisited, up to three stops before departure.
        let picks: Vec<&ActivityOption> = pool
            .iter()
            .filter(|o| !used.has_option(o))
            .take(3)
            .collect();
        let mut remaining = Vec::new();
        for option in picks {
            used.mark_option(option);
            remaining.push(planned_from_option(option));
        }
        if remaining.is_empty() {
            remaining = self.afternoon_fallback(pool);
        }
        sections.push(Section::new(SectionTitle::Afternoon, remaining));

        sections.push(Section::new(
            SectionTitle::Lunch,
            self.pick_restaurants(&restaurants.lunch, day_index, LUNCH_COST, 2, true, used),
        ));

        sections.push(Section::new(
            SectionTitle::Afternoon,
            vec![PlannedPlace {
                name: format!("Depart from {}", self.city),
                description: format!("{} airport", self.city),
                cost: 0.0,
                maps_url: Some(maps_search_url(&format!("{} airport", self.city))),
            }],
        ));

        sections
    }

    fn breakfast_section(&self) -> Section {
        Section::new(
            SectionTitle::Morning,
            vec![PlannedPlace {
                name: "Breakfast".to_string(),
                description: self.city.clone(),
                cost: BREAKFAST_COST,
                maps_url: None,
            }],
        )
    }

    /// Two pool places at a day-scaled offset, so consecutive days walk
    /// different stretches of the attraction list.
    fn offset_places(
        &self,
        pool: &[ActivityOption],
        offset: usize,
        count: usize,
        used: &mut UsedPlaces,
    ) -> Vec<PlannedPlace> {
        let mut places = Vec::new();
        for option in pool.iter().skip(offset).take(count) {
            if !used.has_option(option) {
                used.mark_option(option);
                places.push(planned_from_option(option));
            }
        }

        if places.is_empty() {
            // The offset window was exhausted; draw from the full pool before
            // conceding to a generic placeholder.
            if let Some(option) = pool
                .iter()
                .find(|o| !used.has_option(o))
                .or_else(|| pool.get(offset))
                .or_else(|| pool.first())
            {
                used.mark_option(option);
                places.push(planned_from_option(option));
            }
        }

        if places.is_empty() {
            places.push(self.placeholder_place());
        }
        places
    }

    fn evening_places(
        &self,
        day_index: usize,
        pool: &[ActivityOption],
        restaurants: &RestaurantOptions,
        used: &mut UsedPlaces,
    ) -> Vec<PlannedPlace> {
        let mut places = Vec::new();

        // The social mood trades the dinner table for nightlife when the pool
        // has a venue to offer.
        if self.moods.iter().any(|m| m.to_lowercase().contains("social")) {
            let venues: Vec<&ActivityOption> = pool
                .iter()
                .filter(|o| {
                    o.kind == ActivityKind::Entertainment
                        || o.name.to_lowercase().contains("club")
                        || o.name.to_lowercase().contains("bar")
                })
                .collect();
            for option in venues.iter().skip(day_index).take(1) {
                if !used.has_option(option) {
                    used.mark_option(option);
                    let mut place = planned_from_option(option);
                    if place.cost == 0.0 {
                        place.cost = DINNER_COST;
                    }
                    places.push(place);
                }
            }
        }

        let unused: Vec<&Place> = restaurants
            .dinner
            .iter()
            .filter(|r| !used.has_place(r))
            .collect();
        let available: Vec<&Place> = if unused.is_empty() {
            restaurants.dinner.iter().collect()
        } else {
            unused
        };
        if let Some(restaurant) = available.get(day_index).or_else(|| available.first()) {
            if !used.has_place(restaurant) {
                used.mark_place(restaurant);
                places.push(self.restaurant_place(restaurant, DINNER_COST));
            }
        }

        if places.is_empty() {
            places.push(PlannedPlace {
                name: format!("Popular Restaurant in {}", self.city),
                description: self.city.clone(),
                cost: DINNER_COST,
                maps_url: Some(maps_search_url(&format!("restaurants {}", self.city))),
            });
        }
        places
    }

    /// Restaurant selection for one meal slot. Unused restaurants are
    /// preferred; when every option has been used the full list is fair game
    /// again rather than leaving the section empty. The pick is indexed by
    /// day so distinct days tend to get distinct restaurants.
    fn pick_restaurants(
        &self,
        candidates: &[Place],
        day_index: usize,
        default_cost: f32,
        alternates: usize,
        seeded: bool,
        used: &mut UsedPlaces,
    ) -> Vec<PlannedPlace> {
        let unused: Vec<&Place> = candidates.iter().filter(|r| !used.has_place(r)).collect();
        let mut available: Vec<&Place> = if unused.is_empty() {
            candidates.iter().collect()
        } else {
            unused
        };

        if seeded && !available.is_empty() {
            available.sort_by_key(|r| seeded_sort_key(r.identity(), day_index));
        }

        let primary = if seeded {
            available.get(day_index % available.len().max(1)).copied()
        } else {
            available.get(day_index).or_else(|| available.first()).copied()
        };

        let mut places = Vec::new();
        if let Some(restaurant) = primary {
            used.mark_place(restaurant);
            places.push(self.restaurant_place(restaurant, default_cost));

            let extras: Vec<&Place> = available
                .iter()
                .copied()
                .filter(|r| r.identity() != restaurant.identity() && !used.has_place(r))
                .take(alternates)
                .collect();
            for alternate in extras {
                used.mark_place(alternate);
                places.push(self.restaurant_place(alternate, default_cost));
            }
        }

        if places.is_empty() {
            places.push(PlannedPlace {
                name: format!("Restaurant in {}", self.city),
                description: self.city.clone(),
                cost: default_cost,
                maps_url: Some(maps_search_url(&format!("restaurants {}", self.city))),
            });
        }
        places
    }

    fn restaurant_place(&self, restaurant: &Place, default_cost: f32) -> PlannedPlace {
        let cost = match restaurant.estimated_cost() {
            c if c > 0.0 => c,
            _ => default_cost,
        };
        PlannedPlace {
            name: restaurant.name.clone(),
            description: if restaurant.address.is_empty() {
                self.city.clone()
            } else {
                restaurant.address.clone()
            },
            cost,
            maps_url: Some(restaurant.maps_url.clone()),
        }
    }

    /// Distribute the pool across days. With a detectable sub-area split and
    /// no more areas than days, each day is assigned one area round-robin;
    /// otherwise the pool is sliced evenly under a seeded ordering.
    fn places_for_day(&self, pool: &[ActivityOption], day_index: usize) -> Vec<ActivityOption> {
        if pool.is_empty() {
            return Vec::new();
        }

        let mut sorted: Vec<ActivityOption> = pool.to_vec();
        sorted.sort_by_key(|o| seeded_sort_key(&o.identity, day_index));

        if let Some(classifier) = &self.classifier {
            let groups = group_by_area(&sorted, classifier.as_ref());
            if groups.len() > 1 && groups.len() <= self.total_days {
                let (_, in_area) = &groups[day_index % groups.len()];
                if in_area.len() >= 4 {
                    return in_area.iter().take(MAX_PLACES_PER_SECTION).cloned().collect();
                }
                if in_area.len() >= 2 {
                    let (_, next_area) = &groups[(day_index + 1) % groups.len()];
                    let mut picked: Vec<ActivityOption> = in_area.clone();
                    picked.extend(next_area.iter().take(2).cloned());
                    picked.truncate(MAX_PLACES_PER_SECTION);
                    return picked;
                }
                return in_area.clone();
            }
        }

        let total = sorted.len();
        let per_day = ((total + self.total_days - 1) / self.total_days).max(4);
        let start = day_index * per_day;
        let end = (start + per_day).min(total);

        let mut day_places: Vec<ActivityOption> = if start < total {
            sorted[start..end].to_vec()
        } else {
            Vec::new()
        };

        if day_places.len() < 3 && end < total {
            let needed = 3 - day_places.len();
            day_places.extend(sorted[end..].iter().take(needed).cloned());
        }

        if day_places.is_empty() {
            let offset = (day_index * 3) % total;
            day_places = sorted[offset..].iter().take(4).cloned().collect();
        }

        day_places.truncate(MAX_PLACES_PER_SECTION);
        day_places
    }

    fn afternoon_fallback(&self, pool: &[ActivityOption]) -> Vec<PlannedPlace> {
        let from_pool: Vec<PlannedPlace> = pool.iter().take(3).map(planned_from_option).collect();
        if !from_pool.is_empty() {
            return from_pool;
        }
        vec![self.placeholder_place()]
    }

    fn placeholder_place(&self) -> PlannedPlace {
        PlannedPlace {
            name: format!("Popular Places in {}", self.city),
            description: self.city.clone(),
            cost: 0.0,
            maps_url: Some(maps_search_url(&format!("{} tourist attractions", self.city))),
        }
    }
}

/// Minimal four-section day substituted when planning a day fails outright.
/// Day generation failure is never fatal to the whole itinerary.
pub fn fallback_day(city: &str) -> Vec<Section> {
    vec![
        Section::new(
            SectionTitle::Morning,
            vec![PlannedPlace {
                name: format!("Arrive {}", city),
                description: format!("{} airport", city),
                cost: 0.0,
                maps_url: Some(maps_search_url(&format!("{} airport", city))),
            }],
        ),
        Section::new(
            SectionTitle::Lunch,
            vec![PlannedPlace {
                name: format!("Restaurant in {}", city),
                description: city.to_string(),
                cost: 400.0,
                maps_url: Some(maps_search_url(&format!("restaurants {}", city))),
            }],
        ),
        Section::new(
            SectionTitle::Afternoon,
            vec![PlannedPlace {
                name: format!("Popular Places in {}", city),
                description: city.to_string(),
                cost: 0.0,
                maps_url: Some(maps_search_url(&format!("{} tourist attractions", city))),
            }],
        ),
        Section::new(
            SectionTitle::Dinner,
            vec![PlannedPlace {
                name: format!("Restaurant in {}", city),
                description: city.to_string(),
                cost: 500.0,
                maps_url: Some(maps_search_url(&format!("restaurants {}", city))),
            }],
        ),
    ]
}

fn planned_from_option(option: &ActivityOption) -> PlannedPlace {
    PlannedPlace {
        name: option.name.clone(),
        description: option.description.clone(),
        cost: option.cost,
        maps_url: Some(option.maps_url.clone()),
    }
}

fn group_by_area(
    options: &[ActivityOption],
    classifier: &dyn AreaClassifier,
) -> Vec<(String, Vec<ActivityOption>)> {
    let mut groups: Vec<(String, Vec<ActivityOption>)> = classifier
        .areas()
        .into_iter()
        .chain(std::iter::once("Other"))
        .map(|area| (area.to_string(), Vec::new()))
        .collect();

    for option in options {
        let area = classifier
            .classify(&option.name, &option.description)
            .unwrap_or("Other");
        if let Some((_, members)) = groups.iter_mut().find(|(name, _)| name.as_str() == area) {
            members.push(option.clone());
        }
    }

    groups.retain(|(_, members)| !members.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::maps_search_url;
    use crate::services::sightseeing_service::ActivityKind;

    fn option(id: &str, name: &str, address: &str) -> ActivityOption {
        ActivityOption {
            identity: id.to_string(),
            name: name.to_string(),
            kind: ActivityKind::Sightseeing,
            cost: 100.0,
            description: address.to_string(),
            maps_url: maps_search_url(name),
            moods: vec!["cultural".to_string(), "urban".to_string()],
            rating: Some(4.1),
        }
    }

    fn restaurant(id: &str, name: &str) -> Place {
        Place {
            place_id: Some(id.to_string()),
            name: name.to_string(),
            address: format!("{}, Goa", name),
            types: vec!["restaurant".to_string()],
            rating: Some(4.3),
            rating_count: Some(250),
            price_level: Some(2),
            maps_url: maps_search_url(name),
            location: None,
        }
    }

    fn rich_pool(count: usize) -> Vec<ActivityOption> {
        (0..count)
            .map(|i| option(&format!("poi-{}", i), &format!("Attraction {}", i), "Panaji, Goa"))
            .collect()
    }

    fn restaurant_sets(count: usize) -> RestaurantOptions {
        RestaurantOptions {
            lunch: (0..count)
                .map(|i| restaurant(&format!("lunch-{}", i), &format!("Lunch Spot {}", i)))
                .collect(),
            dinner: (0..count)
                .map(|i| restaurant(&format!("dinner-{}", i), &format!("Dinner Spot {}", i)))
                .collect(),
        }
    }

    fn titles(sections: &[Section]) -> Vec<&'static str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn first_day_has_arrival_template() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &[], 3);
        let mut used = UsedPlaces::new();
        let sections = planner.plan_day(0, &rich_pool(12), &restaurant_sets(6), &mut used);
        assert_eq!(titles(&sections), vec!["Morning", "Lunch", "Afternoon", "Dinner"]);
        assert_eq!(sections[0].places[0].name, "Arrive Lisbon");
        assert!(sections[2].places.len() >= 3);
    }

    #[test]
    fn middle_day_has_five_sections() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &[], 3);
        let mut used = UsedPlaces::new();
        let sections = planner.plan_day(1, &rich_pool(12), &restaurant_sets(6), &mut used);
        assert_eq!(
            titles(&sections),
            vec!["Morning", "Morning", "Lunch", "Afternoon", "Evening"]
        );
        assert_eq!(sections[0].places[0].name, "Breakfast");
    }

    #[test]
    fn last_day_ends_with_departure() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &[], 3);
        let mut used = UsedPlaces::new();
        let sections = planner.plan_day(2, &rich_pool(12), &restaurant_sets(6), &mut used);
        assert_eq!(titles(&sections), vec!["Morning", "Afternoon", "Lunch", "Afternoon"]);
        let departure = sections.last().unwrap();
        assert_eq!(departure.places[0].name, "Depart from Lisbon");
        assert_eq!(departure.total_cost, 0.0);
    }

    #[test]
    fn no_place_repeats_across_days() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &[], 4);
        let mut used = UsedPlaces::new();
        let pool = rich_pool(30);
        let restaurants = restaurant_sets(10);

        let mut seen: HashSet<String> = HashSet::new();
        for day in 0..4 {
            let sections = planner.plan_day(day, &pool, &restaurants, &mut used);
            for section in &sections {
                for place in &section.places {
                    // Arrival/breakfast/departure markers are not places.
                    if place.name.starts_with("Arrive")
                        || place.name.starts_with("Depart")
                        || place.name == "Breakfast"
                        || place.name == "Check-in at accommodation"
                    {
                        continue;
                    }
                    assert!(
                        seen.insert(place.name.clone()),
                        "place {} appeared twice",
                        place.name
                    );
                }
            }
        }
    }

    #[test]
    fn sections_stay_non_empty_without_data() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &[], 2);
        let mut used = UsedPlaces::new();
        let empty = RestaurantOptions::default();
        for day in 0..2 {
            let sections = planner.plan_day(day, &[], &empty, &mut used);
            assert!(!sections.is_empty());
            for section in sections {
                assert!(!section.places.is_empty(), "empty {:?} section", section.title);
            }
        }
    }

    #[test]
    fn restaurants_differ_across_days() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &[], 3);
        let mut used = UsedPlaces::new();
        let pool = rich_pool(20);
        let restaurants = restaurant_sets(8);

        let day0 = planner.plan_day(0, &pool, &restaurants, &mut used);
        let day1 = planner.plan_day(1, &pool, &restaurants, &mut used);
        let lunch0 = &day0[1].places[0].name;
        let lunch1 = &day1[2].places[0].name;
        assert_ne!(lunch0, lunch1);
    }

    #[test]
    fn social_mood_prefers_nightlife_for_evening() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &["social".to_string()], 3);
        let mut used = UsedPlaces::new();
        let mut pool = rich_pool(8);
        // The venue pick is offset by day, so a middle day needs more than
        // one nightlife option in the pool.
        for i in 0..3 {
            let mut club = option(&format!("club-{}", i), &format!("LX Club {}", i), "Bairro Alto");
            club.kind = ActivityKind::Entertainment;
            pool.push(club);
        }

        let sections = planner.plan_day(1, &pool, &restaurant_sets(4), &mut used);
        let evening = sections.last().unwrap();
        assert!(evening.places.iter().any(|p| p.name.starts_with("LX Club")));
    }

    #[test]
    fn seeded_key_is_stable_per_day_and_varies_across_days() {
        let a = seeded_sort_key("poi-1", 0);
        let b = seeded_sort_key("poi-1", 0);
        assert_eq!(a, b);
        assert_ne!(seeded_sort_key("poi-1", 0), seeded_sort_key("poi-1", 1));
    }

    #[test]
    fn goa_days_group_by_area() {
        let planner = DayPlanner::new("Goa", "Goa", &[], 2);
        let pool = vec![
            option("n1", "Baga Beach", "Baga, North Goa"),
            option("n2", "Anjuna Flea Market", "Anjuna, Goa"),
            option("n3", "Chapora Fort", "Vagator, Goa"),
            option("n4", "Calangute Beach", "Calangute, Goa"),
            option("s1", "Palolem Beach", "Canacona, South Goa"),
            option("s2", "Colva Beach", "Colva, Goa"),
            option("s3", "Dudhsagar Falls", "Mollem, Goa"),
            option("s4", "Basilica of Bom Jesus", "Old Goa"),
        ];

        let day0 = planner.places_for_day(&pool, 0);
        let day1 = planner.places_for_day(&pool, 1);

        let day0_ids: HashSet<&str> = day0.iter().map(|o| o.identity.as_str()).collect();
        let day1_ids: HashSet<&str> = day1.iter().map(|o| o.identity.as_str()).collect();
        assert!(day0_ids.iter().all(|id| id.starts_with('n')) || day0_ids.iter().all(|id| id.starts_with('s')));
        assert!(day0_ids.is_disjoint(&day1_ids));
    }

    #[test]
    fn even_slicing_gives_disjoint_days() {
        let planner = DayPlanner::new("Lisbon", "Lisbon", &[], 3);
        let pool = rich_pool(12);
        let day0 = planner.places_for_day(&pool, 0);
        let day1 = planner.places_for_day(&pool, 1);
        let ids0: HashSet<&str> = day0.iter().map(|o| o.identity.as_str()).collect();
        let ids1: HashSet<&str> = day1.iter().map(|o| o.identity.as_str()).collect();
        assert!(ids0.is_disjoint(&ids1));
        assert!(day0.len() >= 3);
    }

    #[test]
    fn fallback_day_has_four_sections() {
        let sections = fallback_day("Lisbon");
        assert_eq!(titles(&sections), vec!["Morning", "Lunch", "Afternoon", "Dinner"]);
        assert!(sections.iter().all(|s| !s.places.is_empty()));
    }
}
