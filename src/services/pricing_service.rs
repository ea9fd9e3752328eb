use crate::models::offer::{FlightOffer, HotelOffer, TaxiOffer};
use crate::models::trip::PlanStatus;

pub struct PricingService;

impl PricingService {
    /// Exact sum of the selected leg prices; a missing taxi contributes 0.
    pub fn total_cost(flight: &FlightOffer, hotel: &HotelOffer, taxi: Option<&TaxiOffer>) -> i64 {
        flight.price + hotel.price + taxi.map_or(0, |t| t.price)
    }

    /// Budget check with an inclusive threshold: spending the whole budget
    /// is still `Ok`.
    pub fn evaluate(total_cost: i64, budget: i64) -> PlanStatus {
        if total_cost <= budget {
            PlanStatus::Ok
        } else {
            PlanStatus::OverBudget
        }
    }
}
