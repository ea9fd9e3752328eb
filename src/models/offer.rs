use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single priced flight record. Prices are in the smallest currency unit.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FlightOffer {
    pub id: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub price: i64,
    pub airline: String,
    pub service_date: NaiveDate,
}

/// A hotel record; `available_from` is the first date a stay can start.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HotelOffer {
    pub id: String,
    pub city: String,
    pub price: i64,
    pub rating: f32,
    pub available_from: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaxiOffer {
    pub id: String,
    pub city: String,
    pub price: i64,
}
