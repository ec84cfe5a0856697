use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use crate::models::itinerary::ItineraryFilters;
use crate::services::itinerary_service::{ItineraryBuilder, ItineraryError};

/*
    /api/itineraries/generate
*/
pub async fn generate(
    filters: web::Json<ItineraryFilters>,
    builder: web::Data<ItineraryBuilder>,
) -> impl Responder {
    match builder.build(&filters).await {
        Ok(itinerary) => HttpResponse::Ok().json(itinerary),
        Err(ItineraryError::Validation(msg)) => {
            HttpResponse::BadRequest().json(json!({ "error": msg }))
        }
        Err(ItineraryError::BuildTimeout) => {
            error!("itinerary build timed out for \"{}\"", filters.destination);
            HttpResponse::GatewayTimeout().json(json!({
                "error": "itinerary build timed out, please retry"
            }))
        }
    }
}
