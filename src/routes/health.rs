use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check() -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let place_search = check_place_search();
    health
        .services
        .insert("place_search".to_string(), place_search.clone());

    // The engine works offline, so a missing search key degrades rather than
    // failing the health check outright.
    if place_search.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_place_search() -> ServiceStatus {
    match env::var("GOOGLE_PLACES_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };
            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("Places API key configured ({})", masked_key)),
            }
        }
        _ => ServiceStatus {
            status: "offline".to_string(),
            details: Some(
                "GOOGLE_PLACES_API_KEY not configured; itineraries use generic fallback content"
                    .to_string(),
            ),
        },
    }
}
