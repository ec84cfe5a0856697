use chrono::Duration as ChronoDuration;
use log::{info, warn};
use std::error::Error;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use crate::models::accommodation::Accommodation;
use crate::models::itinerary::{
    currency_symbol, CostBreakdown, DayPlan, Itinerary, ItineraryFilters,
};
use crate::services::accommodation_catalog::AccommodationCatalog;
use crate::services::city_resolver::{title_case, CityResolver};
use crate::services::day_planner::{fallback_day, DayPlanner, UsedPlaces};
use crate::services::place_aggregator::{aggregate, DestinationPlaces};
use crate::services::place_search_service::GooglePlacesClient;
use crate::services::sightseeing_service::{collect_options, fallback_activities, filter_by_mood};
use crate::services::travel_tips::money_saving_tips;

/// Outer budget for one whole build; a pipeline overrun is surfaced as a
/// retryable timeout rather than hanging the caller.
const DEFAULT_BUILD_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug)]
pub enum ItineraryError {
    Validation(String),
    BuildTimeout,
}

impl fmt::Display for ItineraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryError::Validation(msg) => write!(f, "validation error: {}", msg),
            ItineraryError::BuildTimeout => write!(f, "itinerary build timed out"),
        }
    }
}

impl Error for ItineraryError {}

/// Top-level orchestrator: validates filters, aggregates places once per
/// trip, plans each day sequentially over the shared used-place set, and
/// derives the cost breakdown.
pub struct ItineraryBuilder {
    search: Option<GooglePlacesClient>,
    resolver: CityResolver,
    catalog: AccommodationCatalog,
    build_timeout: Duration,
}

impl ItineraryBuilder {
    /// Build from the environment. A missing place-search credential is not
    /// an error; the builder runs the fully offline fallback path instead.
    pub fn from_env() -> Self {
        let search = match GooglePlacesClient::from_env() {
            Ok(client) => {
                info!("place search client initialized");
                Some(client)
            }
            Err(e) => {
                warn!("place search not available: {}. Using offline fallback content.", e);
                None
            }
        };

        Self {
            search,
            resolver: CityResolver::new(),
            catalog: AccommodationCatalog::new(),
            build_timeout: DEFAULT_BUILD_TIMEOUT,
        }
    }

    /// Builder with no search provider; every request takes the offline path.
    pub fn offline() -> Self {
        Self {
            search: None,
            resolver: CityResolver::new(),
            catalog: AccommodationCatalog::new(),
            build_timeout: DEFAULT_BUILD_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.build_timeout = timeout;
        self
    }

    pub async fn build(&self, filters: &ItineraryFilters) -> Result<Itinerary, ItineraryError> {
        validate(filters)?;
        tokio::time::timeout(self.build_timeout, self.assemble(filters))
            .await
            .map_err(|_| ItineraryError::BuildTimeout)
    }

    async fn assemble(&self, filters: &ItineraryFilters) -> Itinerary {
        let destination = filters.destination.trim().to_string();
        let moods = normalized_moods(&filters.moods);
        let per_person_budget = filters.budget / filters.num_people as f32;

        info!(
            "generating itinerary: {} / {} days / {} people / budget {} / moods {:?}",
            destination, filters.days, filters.num_people, filters.budget, moods
        );

        let accommodations =
            self.catalog
                .get_accommodations(&destination, filters.num_people, filters.budget);

        // One aggregation pass feeds every day of the trip; only the
        // used-place set changes between days.
        let places = match &self.search {
            Some(client) => {
                let outcome = aggregate(client, &self.resolver, &destination, &moods).await;
                if !outcome.diagnostics.is_empty() {
                    warn!(
                        "{} place queries failed during aggregation",
                        outcome.diagnostics.len()
                    );
                }
                outcome.places
            }
            None => {
                let client: Option<&GooglePlacesClient> = None;
                let city = self.resolver.resolve(client, &destination).await;
                DestinationPlaces::empty(&city)
            }
        };
        let main_city = places.city.clone();

        // Real provider data anywhere beats the generic fallback, even if
        // individual categories came back thin.
        let pool = if places.has_real_data() {
            filter_by_mood(collect_options(&places), &moods)
        } else {
            fallback_activities(&main_city, &moods)
        };

        let planner = DayPlanner::new(&destination, &main_city, &moods, filters.days);
        let mut used = UsedPlaces::new();
        let mut days_plan = Vec::with_capacity(filters.days as usize);

        for day_index in 0..filters.days as usize {
            let date = filters.start_date + ChronoDuration::days(day_index as i64);
            let mut sections = planner.plan_day(day_index, &pool, &places.restaurants, &mut used);
            if sections.is_empty() {
                warn!("day {} produced no sections, substituting fallback day", day_index + 1);
                sections = fallback_day(&main_city);
            }
            days_plan.push(DayPlan {
                day: day_index as u32 + 1,
                date,
                sections,
            });
        }

        let cost_breakdown = cost_breakdown(
            &days_plan,
            &accommodations,
            filters.budget,
            filters.num_people,
            filters.days,
        );

        Itinerary {
            id: Uuid::new_v4(),
            destination: title_case(&destination),
            main_city: main_city.clone(),
            start_date: filters.start_date,
            end_date: filters.end_date,
            days: filters.days,
            num_people: filters.num_people,
            budget: filters.budget,
            per_person_budget,
            currency: currency_symbol(&filters.currency).to_string(),
            moods,
            accommodations,
            days_plan,
            cost_breakdown,
            money_saving_tips: money_saving_tips(&destination, &main_city),
        }
    }
}

fn validate(filters: &ItineraryFilters) -> Result<(), ItineraryError> {
    if filters.destination.trim().is_empty() {
        return Err(ItineraryError::Validation(
            "destination is required".to_string(),
        ));
    }
    if filters.end_date <= filters.start_date {
        return Err(ItineraryError::Validation(
            "end date must be after start date".to_string(),
        ));
    }
    if filters.days < 1 {
        return Err(ItineraryError::Validation(
            "days must be at least 1".to_string(),
        ));
    }
    if filters.num_people < 1 {
        return Err(ItineraryError::Validation(
            "number of people must be at least 1".to_string(),
        ));
    }
    if filters.budget <= 0.0 {
        return Err(ItineraryError::Validation(
            "budget must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn normalized_moods(moods: &[String]) -> Vec<String> {
    let cleaned: Vec<String> = moods
        .iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();
    if cleaned.is_empty() {
        vec!["relaxing".to_string()]
    } else {
        cleaned
    }
}

/// Fixed proportional estimates, not a pricing engine; the contract is
/// reproducibility. Food and activities both derive from the same summed
/// section costs.
fn cost_breakdown(
    days_plan: &[DayPlan],
    accommodations: &[Accommodation],
    budget: f32,
    num_people: u32,
    days: u32,
) -> CostBreakdown {
    let people = num_people as f32;
    let section_costs: f32 = days_plan
        .iter()
        .flat_map(|d| d.sections.iter())
        .map(|s| s.total_cost)
        .sum();

    let accommodation = match accommodations.first() {
        Some(stay) => stay.price * people * (days.saturating_sub(1)) as f32,
        None => budget * 0.4,
    };
    let food = section_costs * people;
    let activities = section_costs * people;
    let local_travel = (budget * 0.05 * people).round();
    let misc = (budget * 0.05 * people).round();
    let total = accommodation + food + activities + local_travel + misc;

    CostBreakdown {
        accommodation,
        food,
        activities,
        local_travel,
        misc,
        total,
        per_person: total / people,
    }
}
