use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::models::offer::{FlightOffer, HotelOffer, TaxiOffer};

/// Incoming planning request, as posted by the trip form.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TripRequest {
    pub departure_city: String,
    pub arrival_city: String,
    /// Travel date as `YYYY-MM-DD`; missing or unparsable falls back to today.
    #[serde(default)]
    pub travel_date: Option<String>,
    pub budget: i64,
    /// Hotel check-in flexibility in days after the flight date.
    #[serde(default)]
    pub flex_window_days: Option<u32>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    #[serde(rename = "OK")]
    Ok,
    OverBudget,
    NoFlights,
    NoHotelAnywhere,
}

/// Which matching rule produced the chosen hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelSelectionMethod {
    ExactCityWithinWindow,
    NearbyCity(String),
    NearbyCityNextAvail(String),
}

impl fmt::Display for HotelSelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelSelectionMethod::ExactCityWithinWindow => write!(f, "ExactCityWithinWindow"),
            HotelSelectionMethod::NearbyCity(city) => write!(f, "NearbyCity:{}", city),
            HotelSelectionMethod::NearbyCityNextAvail(city) => {
                write!(f, "NearbyCityNextAvail:{}", city)
            }
        }
    }
}

impl Serialize for HotelSelectionMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A hotel pick together with the rule that selected it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SelectedHotel {
    #[serde(flatten)]
    pub offer: HotelOffer,
    pub method: HotelSelectionMethod,
}

/// Outcome of a single planning call. `Ok` and `OverBudget` always carry a
/// flight, a hotel and a total; the taxi leg is optional everywhere.
#[derive(Debug, Serialize, Clone)]
pub struct PlanningResult {
    pub status: PlanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<SelectedHotel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxi: Option<TaxiOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<i64>,
    pub explanation: Vec<String>,
    pub flight_candidates: Vec<FlightOffer>,
}

impl PlanningResult {
    pub fn no_flights() -> Self {
        Self {
            status: PlanStatus::NoFlights,
            message: Some("No flights found for route.".to_string()),
            flight: None,
            hotel: None,
            taxi: None,
            total_cost: None,
            explanation: Vec::new(),
            flight_candidates: Vec::new(),
        }
    }

    pub fn no_hotel_anywhere(flight_candidates: Vec<FlightOffer>) -> Self {
        Self {
            status: PlanStatus::NoHotelAnywhere,
            message: Some(
                "No hotel found in city or nearby; recommend adjusting date or city.".to_string(),
            ),
            flight: None,
            hotel: None,
            taxi: None,
            total_cost: None,
            explanation: Vec::new(),
            flight_candidates,
        }
    }
}
