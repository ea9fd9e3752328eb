use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::catalog::ServiceCatalog;
use crate::models::trip::TripRequest;
use crate::services::planner_service::{self, PlannerConfig};

/*
    /api/trips/plan
*/
pub async fn plan(
    data: web::Data<Arc<ServiceCatalog>>,
    input: web::Json<TripRequest>,
) -> impl Responder {
    let catalog = data.into_inner();
    let request = input.into_inner();

    if request.departure_city.trim().is_empty() || request.arrival_city.trim().is_empty() {
        return HttpResponse::BadRequest().body("Departure and arrival cities are required.");
    }
    if request.budget <= 0 {
        return HttpResponse::BadRequest().body("Budget must be a positive amount.");
    }

    let config = PlannerConfig::from_env();
    let result = planner_service::plan_trip(&catalog, &request, &config);

    // Planning outcomes, including the terminal failures, are payloads, not
    // HTTP errors; the form renders them from the status field.
    HttpResponse::Ok().json(result)
}
