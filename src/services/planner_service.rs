use chrono::{Local, NaiveDate};

use crate::db::catalog::ServiceCatalog;
use crate::models::trip::{PlanningResult, TripRequest};
use crate::services::{
    explanation_service, flight_service, hotel_service, pricing_service::PricingService,
    taxi_service,
};

const DEFAULT_FLEX_WINDOW_DAYS: u32 = 2;

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Flexible hotel check-in window applied when the request leaves it out.
    pub default_flex_window_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_flex_window_days: DEFAULT_FLEX_WINDOW_DAYS,
        }
    }
}

impl PlannerConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_flex_window_days: std::env::var("PLANNER_FLEX_WINDOW_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_flex_window_days),
        }
    }
}

/// Parse the requested travel date; missing or unparsable input falls back
/// to today rather than failing the request.
fn resolve_travel_date(raw: Option<&str>) -> NaiveDate {
    raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive())
}

/// Assemble a flight + hotel + taxi itinerary for the request.
///
/// The pipeline is strictly sequential with no backtracking: the cheapest
/// flight fixes the date the hotel search works from, and the chosen hotel
/// fixes the city the taxi search prefers. `NoFlights` and `NoHotelAnywhere`
/// terminate the pipeline immediately; an over-budget itinerary is still
/// returned in full so the caller can decide what to relax.
pub fn plan_trip(
    catalog: &ServiceCatalog,
    request: &TripRequest,
    config: &PlannerConfig,
) -> PlanningResult {
    let travel_date = resolve_travel_date(request.travel_date.as_deref());
    let window_days = request
        .flex_window_days
        .unwrap_or(config.default_flex_window_days);
    println!(
        "Planning trip {} -> {} on {} with budget ₹{}",
        request.departure_city, request.arrival_city, travel_date, request.budget
    );

    let flight_candidates =
        flight_service::matching_flights(catalog, &request.departure_city, &request.arrival_city);
    let flight = match flight_candidates.first() {
        Some(flight) => flight.clone(),
        None => return PlanningResult::no_flights(),
    };

    // Hotel availability is anchored on the day the chosen flight actually
    // flies, not on the requested date.
    let hotel = match hotel_service::select_hotel(
        catalog,
        &request.arrival_city,
        flight.service_date,
        window_days,
    ) {
        Some(hotel) => hotel,
        None => return PlanningResult::no_hotel_anywhere(flight_candidates),
    };

    let taxi = taxi_service::select_taxi(catalog, Some(&hotel.offer.city));

    let total_cost = PricingService::total_cost(&flight, &hotel.offer, taxi.as_ref());
    let status = PricingService::evaluate(total_cost, request.budget);

    let explanation =
        explanation_service::build_explanation(&flight, &hotel, taxi.as_ref(), total_cost, request.budget);

    PlanningResult {
        status,
        message: None,
        flight: Some(flight),
        hotel: Some(hotel),
        taxi,
        total_cost: Some(total_cost),
        explanation,
        flight_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::{HotelSelectionMethod, PlanStatus};

    fn request(budget: i64) -> TripRequest {
        TripRequest {
            departure_city: "Chennai".to_string(),
            arrival_city: "Delhi".to_string(),
            travel_date: Some("2025-11-05".to_string()),
            budget,
            flex_window_days: Some(2),
        }
    }

    #[test]
    fn test_plan_within_budget() {
        let catalog = ServiceCatalog::with_sample_data();

        let result = plan_trip(&catalog, &request(15000), &PlannerConfig::default());

        assert_eq!(result.status, PlanStatus::Ok);
        let flight = result.flight.unwrap();
        assert_eq!(flight.price, 6500);
        let hotel = result.hotel.unwrap();
        assert_eq!(hotel.method, HotelSelectionMethod::ExactCityWithinWindow);
        let taxi = result.taxi.unwrap();
        assert_eq!(taxi.city, "Delhi");
        assert_eq!(
            result.total_cost.unwrap(),
            flight.price + hotel.offer.price + taxi.price
        );
        assert_eq!(result.flight_candidates.len(), 3);
        assert_eq!(result.explanation.len(), 4);
    }

    #[test]
    fn test_over_budget_still_carries_selections() {
        let catalog = ServiceCatalog::with_sample_data();

        let result = plan_trip(&catalog, &request(5000), &PlannerConfig::default());

        assert_eq!(result.status, PlanStatus::OverBudget);
        assert!(result.flight.is_some());
        assert!(result.hotel.is_some());
        assert!(result.total_cost.unwrap() > 5000);
        assert!(!result.explanation.is_empty());
    }

    #[test]
    fn test_no_flights_is_terminal() {
        let catalog = ServiceCatalog::with_sample_data();

        let mut req = request(15000);
        req.arrival_city = "Bangalore".to_string();
        let result = plan_trip(&catalog, &req, &PlannerConfig::default());

        assert_eq!(result.status, PlanStatus::NoFlights);
        assert!(result.flight.is_none());
        assert!(result.hotel.is_none());
        assert!(result.total_cost.is_none());
        assert!(result.flight_candidates.is_empty());
        assert_eq!(result.message.unwrap(), "No flights found for route.");
    }

    #[test]
    fn test_no_hotel_anywhere_is_terminal_but_lists_candidates() {
        let mut catalog = ServiceCatalog::with_sample_data();
        // A route with flights into a city that has no hotels and no tiers.
        catalog.add_flight(crate::models::offer::FlightOffer {
            id: "Flight9".to_string(),
            departure_city: "Chennai".to_string(),
            arrival_city: "Kolkata".to_string(),
            price: 4000,
            airline: "IndiGo".to_string(),
            service_date: NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
        });

        let mut req = request(15000);
        req.arrival_city = "Kolkata".to_string();
        let result = plan_trip(&catalog, &req, &PlannerConfig::default());

        assert_eq!(result.status, PlanStatus::NoHotelAnywhere);
        assert!(result.hotel.is_none());
        assert_eq!(result.flight_candidates.len(), 1);
    }

    #[test]
    fn test_unparsable_date_falls_back_to_today() {
        assert_eq!(
            resolve_travel_date(Some("not-a-date")),
            Local::now().date_naive()
        );
        assert_eq!(resolve_travel_date(None), Local::now().date_naive());
        assert_eq!(
            resolve_travel_date(Some("2025-11-05")),
            NaiveDate::from_ymd_opt(2025, 11, 5).unwrap()
        );
    }

    #[test]
    fn test_request_window_overrides_config_default() {
        let mut catalog = ServiceCatalog::with_sample_data();
        catalog.add_flight(crate::models::offer::FlightOffer {
            id: "FlightN".to_string(),
            departure_city: "Chennai".to_string(),
            arrival_city: "Jaipur".to_string(),
            price: 5000,
            airline: "IndiGo".to_string(),
            service_date: NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
        });
        catalog.add_hotel(crate::models::offer::HotelOffer {
            id: "HotelJ1".to_string(),
            city: "Jaipur".to_string(),
            price: 2000,
            rating: 4.0,
            available_from: NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(),
        });

        let mut req = request(15000);
        req.arrival_city = "Jaipur".to_string();

        // Four days out is beyond the default window of 2.
        req.flex_window_days = None;
        let result = plan_trip(&catalog, &req, &PlannerConfig::default());
        assert_eq!(result.status, PlanStatus::NoHotelAnywhere);

        req.flex_window_days = Some(4);
        let result = plan_trip(&catalog, &req, &PlannerConfig::default());
        assert_eq!(result.status, PlanStatus::Ok);
    }
}
