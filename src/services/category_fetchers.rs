use log::warn;
use std::collections::HashMap;

use crate::models::place::Place;
use crate::services::place_search_service::PlaceSearch;

/// Outcome of one failed provider query, returned as data to the caller
/// instead of being accumulated in process-wide state.
#[derive(Debug, Clone)]
pub struct QueryDiagnostic {
    pub query: String,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub places: Vec<Place>,
    pub diagnostics: Vec<QueryDiagnostic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Lunch,
    Dinner,
}

/// A bounded fetch: the query list is capped and issued sequentially, and the
/// loop stops early once enough results have accumulated. Completeness is
/// traded for bounded latency.
struct QueryPlan {
    queries: Vec<String>,
    max_queries: usize,
    per_query: usize,
    stop_at: usize,
}

async fn run_plan<P: PlaceSearch>(client: &P, plan: QueryPlan) -> FetchOutcome {
    let mut merged: Vec<Place> = Vec::new();
    let mut diagnostics = Vec::new();

    for query in plan.queries.iter().take(plan.max_queries) {
        match client.text_search(query, plan.per_query).await {
            Ok(places) => merged.extend(places),
            Err(e) => {
                warn!("query \"{}\" failed: {}", query, e);
                diagnostics.push(QueryDiagnostic {
                    query: query.clone(),
                    detail: e.to_string(),
                });
            }
        }
        if merged.len() >= plan.stop_at {
            break;
        }
    }

    FetchOutcome {
        places: dedupe_by_identity(merged),
        diagnostics,
    }
}

/// Last write wins; records sharing an identity are equivalent. First-seen
/// order is preserved so provider ranking survives the merge.
fn dedupe_by_identity(places: Vec<Place>) -> Vec<Place> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Place> = Vec::new();
    for place in places {
        let key = place.identity().to_string();
        match index.get(&key) {
            Some(&i) => unique[i] = place,
            None => {
                index.insert(key, unique.len());
                unique.push(place);
            }
        }
    }
    unique
}

/// Combine the resolved city with the raw destination so queries stay pinned
/// to the right region ("Kochi, Kerala" rather than just "Kochi").
fn location_query(destination: &str, city: &str) -> String {
    if !city.is_empty() && !city.eq_ignore_ascii_case(destination) {
        format!("{}, {}", city, destination)
    } else {
        destination.to_string()
    }
}

fn rank_by_popularity(places: &mut [Place]) {
    places.sort_by(|a, b| {
        b.rating_count
            .unwrap_or(0)
            .cmp(&a.rating_count.unwrap_or(0))
            .then_with(|| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)))
    });
}

fn moods_contain(moods: &[String], keyword: &str) -> bool {
    moods.iter().any(|m| m.to_lowercase().contains(keyword))
}

fn attraction_queries(loc: &str, moods: &[String]) -> Vec<String> {
    let templates: &[&str] = if moods_contain(moods, "cultural") {
        &[
            "museums",
            "historical sites",
            "cultural landmarks",
            "churches",
            "temples",
            "heritage sites",
            "art galleries",
        ]
    } else if moods_contain(moods, "social") {
        &[
            "nightlife",
            "clubs",
            "bars",
            "entertainment",
            "popular places",
            "happening places",
            "shopping malls",
        ]
    } else if moods_contain(moods, "food") {
        &[
            "restaurants",
            "cafes",
            "bars",
            "food places",
            "popular restaurants",
            "local food",
        ]
    } else if moods_contain(moods, "nature") {
        &[
            "parks",
            "beaches",
            "nature attractions",
            "wildlife sanctuary",
            "waterfalls",
            "scenic viewpoints",
        ]
    } else if moods_contain(moods, "urban") {
        &[
            "shopping malls",
            "city center",
            "downtown",
            "urban attractions",
            "markets",
        ]
    } else if moods_contain(moods, "relax") {
        &[
            "spas",
            "beaches",
            "parks",
            "resorts",
            "scenic viewpoints",
            "peaceful places",
        ]
    } else {
        &[
            "tourist attractions",
            "must visit places",
            "popular sights",
            "museums",
            "historical sites",
        ]
    };
    templates.iter().map(|t| format!("{} {}", t, loc)).collect()
}

/// Popular attractions and sightseeing places, biased by the dominant mood.
pub async fn fetch_attractions<P: PlaceSearch>(
    client: &P,
    destination: &str,
    city: &str,
    moods: &[String],
) -> FetchOutcome {
    let loc = location_query(destination, city);
    let mut outcome = run_plan(
        client,
        QueryPlan {
            queries: attraction_queries(&loc, moods),
            max_queries: 3,
            per_query: 6,
            stop_at: 15,
        },
    )
    .await;

    rank_by_popularity(&mut outcome.places);
    outcome.places.truncate(20);
    outcome
}

/// Restaurants for a meal slot. Lunch prefers affordable options, dinner
/// better-rated ones; both keep only food-typed results.
pub async fn fetch_restaurants<P: PlaceSearch>(
    client: &P,
    destination: &str,
    city: &str,
    meal: MealType,
) -> FetchOutcome {
    let loc = location_query(destination, city);
    let templates: &[&str] = match meal {
        MealType::Lunch => &[
            "affordable restaurants",
            "local food",
            "popular lunch",
            "street food",
            "budget restaurants",
            "cafes",
        ],
        MealType::Dinner => &[
            "best restaurants",
            "popular restaurants",
            "dinner",
            "local cuisine",
            "fine dining",
            "bars",
        ],
    };

    let mut outcome = run_plan(
        client,
        QueryPlan {
            queries: templates.iter().map(|t| format!("{} {}", t, loc)).collect(),
            max_queries: 3,
            per_query: 6,
            stop_at: 12,
        },
    )
    .await;

    outcome
        .places
        .retain(|p| p.has_type_matching(&["restaurant", "food", "meal", "cafe"]));

    match meal {
        MealType::Lunch => outcome.places.sort_by(|a, b| {
            a.price_level
                .unwrap_or(2)
                .cmp(&b.price_level.unwrap_or(2))
                .then_with(|| b.rating_count.unwrap_or(0).cmp(&a.rating_count.unwrap_or(0)))
                .then_with(|| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)))
        }),
        MealType::Dinner => rank_by_popularity(&mut outcome.places),
    }

    outcome.places.truncate(15);
    outcome
}

/// Shopping areas. Markets rank ahead of malls for the local experience.
pub async fn fetch_shopping<P: PlaceSearch>(
    client: &P,
    destination: &str,
    city: &str,
) -> FetchOutcome {
    let loc = location_query(destination, city);
    let queries = [
        "shopping malls",
        "markets",
        "shopping streets",
        "local markets",
        "night markets",
    ]
    .iter()
    .map(|t| format!("{} {}", t, loc))
    .collect();

    let mut outcome = run_plan(
        client,
        QueryPlan {
            queries,
            max_queries: 2,
            per_query: 4,
            stop_at: 6,
        },
    )
    .await;

    outcome
        .places
        .retain(|p| p.has_type_matching(&["shopping", "store", "market"]));

    outcome.places.sort_by(|a, b| {
        let a_market = a.has_type_matching(&["market"]);
        let b_market = b.has_type_matching(&["market"]);
        b_market
            .cmp(&a_market)
            .then_with(|| b.rating_count.unwrap_or(0).cmp(&a.rating_count.unwrap_or(0)))
    });

    outcome.places.truncate(8);
    outcome
}

pub async fn fetch_parks<P: PlaceSearch>(
    client: &P,
    destination: &str,
    city: &str,
) -> FetchOutcome {
    let loc = location_query(destination, city);
    let queries = ["parks", "gardens", "public parks"]
        .iter()
        .map(|t| format!("{} {}", t, loc))
        .collect();

    let mut outcome = run_plan(
        client,
        QueryPlan {
            queries,
            max_queries: 2,
            per_query: 4,
            stop_at: 6,
        },
    )
    .await;

    outcome
        .places
        .retain(|p| p.has_type_matching(&["park", "garden"]));
    outcome
        .places
        .sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
    outcome.places.truncate(5);
    outcome
}

pub async fn fetch_viewpoints<P: PlaceSearch>(
    client: &P,
    destination: &str,
    city: &str,
) -> FetchOutcome {
    let loc = location_query(destination, city);
    let queries = ["viewpoints", "observation deck", "scenic spots", "sunset point"]
        .iter()
        .map(|t| format!("{} {}", t, loc))
        .collect();

    let mut outcome = run_plan(
        client,
        QueryPlan {
            queries,
            max_queries: 2,
            per_query: 4,
            stop_at: 6,
        },
    )
    .await;

    // Text queries surface plenty of noise here; keep generic points of
    // interest plus anything well-rated.
    outcome.places.retain(|p| {
        p.has_type_matching(&["point_of_interest", "establishment"])
            || p.rating.map(|r| r >= 4.0).unwrap_or(false)
    });
    outcome
        .places
        .sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
    outcome.places.truncate(5);
    outcome
}
