use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::catalog::{FlightFilter, HotelFilter, ServiceCatalog, TaxiFilter};

#[derive(serde::Deserialize)]
pub struct FlightQueryParams {
    departure: Option<String>,
    arrival: Option<String>,
    limit: Option<u16>,
}

#[derive(serde::Deserialize)]
pub struct HotelQueryParams {
    city: Option<String>,
    search: Option<String>,
    limit: Option<u16>,
}

#[derive(serde::Deserialize)]
pub struct TaxiQueryParams {
    city: Option<String>,
    limit: Option<u16>,
}

fn truncated<T>(mut items: Vec<T>, limit: Option<u16>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit.into());
    }
    items
}

/*
    /api/flights
*/
pub async fn get_flights(
    data: web::Data<Arc<ServiceCatalog>>,
    params: web::Query<FlightQueryParams>,
) -> impl Responder {
    let catalog = data.into_inner();

    let flights = catalog.find_flights(&FlightFilter {
        departure_city: params.departure.clone(),
        arrival_city: params.arrival.clone(),
    });

    HttpResponse::Ok().json(truncated(flights, params.limit))
}

/*
    /api/hotels
*/
pub async fn get_hotels(
    data: web::Data<Arc<ServiceCatalog>>,
    params: web::Query<HotelQueryParams>,
) -> impl Responder {
    let catalog = data.into_inner();

    let mut hotels = catalog.find_hotels(&HotelFilter {
        city: params.city.clone(),
    });

    if let Some(search_text) = &params.search {
        if !search_text.is_empty() {
            let pattern = format!("(?i)^{}", regex::escape(search_text));
            match regex::Regex::new(&pattern) {
                Ok(re) => hotels.retain(|h| re.is_match(&h.city)),
                Err(err) => {
                    eprintln!("Failed to build search pattern: {:?}", err);
                    return HttpResponse::InternalServerError().body("Failed to search hotels.");
                }
            }
        }
    }

    HttpResponse::Ok().json(truncated(hotels, params.limit))
}

/*
    /api/taxis
*/
pub async fn get_taxis(
    data: web::Data<Arc<ServiceCatalog>>,
    params: web::Query<TaxiQueryParams>,
) -> impl Responder {
    let catalog = data.into_inner();

    let taxis = catalog.find_taxis(&TaxiFilter {
        city: params.city.clone(),
    });

    HttpResponse::Ok().json(truncated(taxis, params.limit))
}
