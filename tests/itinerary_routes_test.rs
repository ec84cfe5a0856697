use actix_web::{test, web, App};
use serde_json::json;

use moodmiles_api::routes;
use moodmiles_api::services::accommodation_catalog::AccommodationCatalog;
use moodmiles_api::services::itinerary_service::ItineraryBuilder;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ItineraryBuilder::offline()))
        .app_data(web::Data::new(AccommodationCatalog::new()))
        .route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/api")
                .route(
                    "/accommodations",
                    web::get().to(routes::accommodation::get_accommodations),
                )
                .service(
                    web::scope("/itineraries")
                        .route("/generate", web::post().to(routes::itinerary::generate)),
                ),
        )
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["status"] == "ok" || body["status"] == "degraded");
    assert!(body["services"]["place_search"].is_object());
}

#[actix_web::test]
async fn test_generate_itinerary() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "Goa",
            "start_date": "2025-03-01",
            "end_date": "2025-03-03",
            "days": 3,
            "num_people": 2,
            "budget": 20000.0,
            "moods": ["relaxing"],
            "currency": "INR"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["days_plan"].as_array().unwrap().len(), 3);
    assert_eq!(body["accommodations"].as_array().unwrap().len(), 6);
    assert_eq!(body["per_person_budget"], 10000.0);
}

#[actix_web::test]
async fn test_generate_rejects_blank_destination() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "  ",
            "start_date": "2025-03-01",
            "end_date": "2025-03-03",
            "days": 3,
            "num_people": 2,
            "budget": 20000.0,
            "moods": [],
            "currency": "INR"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("destination"));
}

#[actix_web::test]
async fn test_generate_rejects_inverted_dates() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "Goa",
            "start_date": "2025-03-03",
            "end_date": "2025-03-01",
            "days": 3,
            "num_people": 2,
            "budget": 20000.0,
            "moods": [],
            "currency": "INR"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_generate_rejects_malformed_payload() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({ "destination": "Goa" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_accommodations_endpoint() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/accommodations?destination=Goa&num_people=2&budget=20000")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let stays = body.as_array().unwrap();
    assert_eq!(stays.len(), 6);
    assert_eq!(stays[0]["price"], 9000.0);
}

#[actix_web::test]
async fn test_accommodations_rejects_non_positive_budget() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/accommodations?destination=Goa&num_people=2&budget=0")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
