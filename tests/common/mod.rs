use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use chrono::NaiveDate;
use std::sync::Arc;

use yatra_api::db::catalog::ServiceCatalog;
use yatra_api::models::offer::{FlightOffer, HotelOffer, TaxiOffer};
use yatra_api::routes;

pub struct TestApp {
    pub catalog: Arc<ServiceCatalog>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(ServiceCatalog::with_sample_data()),
        }
    }

    pub fn with_catalog(catalog: ServiceCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/flights", web::get().to(routes::offer::get_flights))
                    .route("/hotels", web::get().to(routes::offer::get_hotels))
                    .route("/taxis", web::get().to(routes::offer::get_taxis))
                    .service(
                        web::scope("/trips").route("/plan", web::post().to(routes::trip::plan)),
                    ),
            )
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn flight(
    id: &str,
    departure: &str,
    arrival: &str,
    price: i64,
    airline: &str,
    service_date: &str,
) -> FlightOffer {
    FlightOffer {
        id: id.to_string(),
        departure_city: departure.to_string(),
        arrival_city: arrival.to_string(),
        price,
        airline: airline.to_string(),
        service_date: date(service_date),
    }
}

pub fn hotel(id: &str, city: &str, price: i64, rating: f32, available_from: &str) -> HotelOffer {
    HotelOffer {
        id: id.to_string(),
        city: city.to_string(),
        price,
        rating,
        available_from: date(available_from),
    }
}

pub fn taxi(id: &str, city: &str, price: i64) -> TaxiOffer {
    TaxiOffer {
        id: id.to_string(),
        city: city.to_string(),
        price,
    }
}
