use crate::models::offer::{FlightOffer, TaxiOffer};
use crate::models::trip::SelectedHotel;

/// Render the decision trace for a completed plan: one line per selected
/// leg plus the cost/budget comparison. Purely derivative — nothing here
/// changes a selection.
pub fn build_explanation(
    flight: &FlightOffer,
    hotel: &SelectedHotel,
    taxi: Option<&TaxiOffer>,
    total_cost: i64,
    budget: i64,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    lines.push(format!(
        "Selected flight {} on {} (₹{}).",
        flight.airline, flight.service_date, flight.price
    ));
    lines.push(format!(
        "Hotel chosen method: {}; hotel: {} available from {} (₹{}).",
        hotel.method, hotel.offer.id, hotel.offer.available_from, hotel.offer.price
    ));
    if let Some(taxi) = taxi {
        lines.push(format!(
            "Taxi chosen: {} in {} (₹{}).",
            taxi.id, taxi.city, taxi.price
        ));
    }
    lines.push(format!(
        "Estimated total cost: ₹{} (Your budget: ₹{}).",
        total_cost, budget
    ));

    lines
}
