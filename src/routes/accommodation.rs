use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::services::accommodation_catalog::AccommodationCatalog;

#[derive(Debug, Deserialize)]
pub struct AccommodationQuery {
    pub destination: String,
    #[serde(default = "default_people")]
    pub num_people: u32,
    pub budget: f32,
}

fn default_people() -> u32 {
    1
}

/*
    /api/accommodations?destination=Goa&num_people=2&budget=20000
*/
pub async fn get_accommodations(
    query: web::Query<AccommodationQuery>,
    catalog: web::Data<AccommodationCatalog>,
) -> impl Responder {
    if query.destination.trim().is_empty() {
        return HttpResponse::BadRequest().body("destination is required");
    }
    if query.budget <= 0.0 {
        return HttpResponse::BadRequest().body("budget must be greater than 0");
    }

    let stays = catalog.get_accommodations(&query.destination, query.num_people, query.budget);
    HttpResponse::Ok().json(stays)
}
