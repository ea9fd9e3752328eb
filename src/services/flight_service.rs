use crate::db::catalog::{FlightFilter, ServiceCatalog};
use crate::models::offer::FlightOffer;

/// All flights for the exact departure/arrival pair, cheapest first.
pub fn matching_flights(
    catalog: &ServiceCatalog,
    departure_city: &str,
    arrival_city: &str,
) -> Vec<FlightOffer> {
    catalog.find_flights(&FlightFilter {
        departure_city: Some(departure_city.to_string()),
        arrival_city: Some(arrival_city.to_string()),
    })
}

/// Cheapest flight on the route, or `None` when the route has no offers.
pub fn select_cheapest(
    catalog: &ServiceCatalog,
    departure_city: &str,
    arrival_city: &str,
) -> Option<FlightOffer> {
    matching_flights(catalog, departure_city, arrival_city)
        .into_iter()
        .next()
}
