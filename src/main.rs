use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use yatra_api::db::catalog::ServiceCatalog;
use yatra_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

fn build_catalog() -> Arc<ServiceCatalog> {
    match std::env::var("CATALOG_PATH") {
        Ok(path) => match ServiceCatalog::from_json_file(&path) {
            Ok(catalog) => {
                println!("Catalog loaded from {}", path);
                Arc::new(catalog)
            }
            Err(e) => {
                eprintln!("Failed to load catalog from {}: {}", path, e);
                eprintln!("Falling back to the built-in sample catalog");
                Arc::new(ServiceCatalog::with_sample_data())
            }
        },
        Err(_) => Arc::new(ServiceCatalog::with_sample_data()),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

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

    let catalog = build_catalog();
    println!(
        "Catalog ready: {} flights, {} hotels, {} taxis",
        catalog.flight_count(),
        catalog.hotel_count(),
        catalog.taxi_count()
    );

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(catalog.clone()))
            .service(
                web::scope("/api")
                    .route("/flights", web::get().to(routes::offer::get_flights))
                    .route("/hotels", web::get().to(routes::offer::get_hotels))
                    .route("/taxis", web::get().to(routes::offer::get_taxis))
                    .service(
                        web::scope("/trips").route("/plan", web::post().to(routes::trip::plan)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
