use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use moodmiles_api::routes;
use moodmiles_api::services::accommodation_catalog::AccommodationCatalog;
use moodmiles_api::services::itinerary_service::ItineraryBuilder;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let builder = web::Data::new(ItineraryBuilder::from_env());
    let catalog = web::Data::new(AccommodationCatalog::new());

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(builder.clone())
            .app_data(catalog.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/accommodations",
                        web::get().to(routes::accommodation::get_accommodations),
                    )
                    .service(web::scope("/itineraries").route(
                        "/generate",
                        web::post().to(routes::itinerary::generate),
                    )),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
