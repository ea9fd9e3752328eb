use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::db::catalog::ServiceCatalog;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    catalog: CatalogStatus,
}

#[derive(Serialize)]
struct CatalogStatus {
    flights: usize,
    hotels: usize,
    taxis: usize,
}

pub async fn health_check(data: web::Data<Arc<ServiceCatalog>>) -> impl Responder {
    let catalog = data.into_inner();

    let mut health = HealthStatus {
        status: "ok".to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: CatalogStatus {
            flights: catalog.flight_count(),
            hotels: catalog.hotel_count(),
            taxis: catalog.taxi_count(),
        },
    };

    // An empty catalog cannot plan anything.
    if health.catalog.flights == 0 && health.catalog.hotels == 0 && health.catalog.taxis == 0 {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}
