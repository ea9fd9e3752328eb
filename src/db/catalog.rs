use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::offer::{FlightOffer, HotelOffer, TaxiOffer};

/// Fallback locations consulted when a city has no in-window hotel, in
/// priority order: the `immediate` tier first, then the wider `region` tier.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NearbyLocations {
    pub immediate: Vec<String>,
    pub region: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HotelFilter {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TaxiFilter {
    pub city: Option<String>,
}

// Seed file shape for CATALOG_PATH.
#[derive(Debug, Deserialize, Serialize, Default)]
struct CatalogData {
    flights: Vec<FlightOffer>,
    hotels: Vec<HotelOffer>,
    taxis: Vec<TaxiOffer>,
    #[serde(default)]
    nearby_locations: HashMap<String, NearbyLocations>,
}

/// In-memory catalog of travel service offers. Built once at startup and
/// shared read-only; planning calls never mutate it. All filters are exact,
/// case-sensitive equality on typed values, and every query returns its
/// matches sorted by ascending price with ties kept in insertion order.
#[derive(Debug, Default)]
pub struct ServiceCatalog {
    flights: Vec<FlightOffer>,
    hotels: Vec<HotelOffer>,
    taxis: Vec<TaxiOffer>,
    nearby: HashMap<String, NearbyLocations>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_flight(&mut self, flight: FlightOffer) {
        self.flights.push(flight);
    }

    pub fn add_hotel(&mut self, hotel: HotelOffer) {
        self.hotels.push(hotel);
    }

    pub fn add_taxi(&mut self, taxi: TaxiOffer) {
        self.taxis.push(taxi);
    }

    pub fn set_nearby_locations(&mut self, city: &str, nearby: NearbyLocations) {
        self.nearby.insert(city.to_string(), nearby);
    }

    pub fn find_flights(&self, filter: &FlightFilter) -> Vec<FlightOffer> {
        let mut matches: Vec<FlightOffer> = self
            .flights
            .iter()
            .filter(|f| {
                filter
                    .departure_city
                    .as_ref()
                    .map_or(true, |city| f.departure_city == *city)
            })
            .filter(|f| {
                filter
                    .arrival_city
                    .as_ref()
                    .map_or(true, |city| f.arrival_city == *city)
            })
            .cloned()
            .collect();
        matches.sort_by_key(|f| f.price);
        matches
    }

    pub fn find_hotels(&self, filter: &HotelFilter) -> Vec<HotelOffer> {
        let mut matches: Vec<HotelOffer> = self
            .hotels
            .iter()
            .filter(|h| filter.city.as_ref().map_or(true, |city| h.city == *city))
            .cloned()
            .collect();
        matches.sort_by_key(|h| h.price);
        matches
    }

    pub fn find_taxis(&self, filter: &TaxiFilter) -> Vec<TaxiOffer> {
        let mut matches: Vec<TaxiOffer> = self
            .taxis
            .iter()
            .filter(|t| filter.city.as_ref().map_or(true, |city| t.city == *city))
            .cloned()
            .collect();
        matches.sort_by_key(|t| t.price);
        matches
    }

    /// Fallback tiers for a city; unknown cities get empty tiers.
    pub fn nearby_locations(&self, city: &str) -> NearbyLocations {
        self.nearby.get(city).cloned().unwrap_or_default()
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    pub fn hotel_count(&self) -> usize {
        self.hotels.len()
    }

    pub fn taxi_count(&self) -> usize {
        self.taxis.len()
    }

    /// Load a catalog from a JSON seed file (see `CatalogData` for the shape).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let data: CatalogData = serde_json::from_reader(BufReader::new(file))?;

        let mut catalog = Self::new();
        for flight in data.flights {
            catalog.add_flight(flight);
        }
        for hotel in data.hotels {
            catalog.add_hotel(hotel);
        }
        for taxi in data.taxis {
            catalog.add_taxi(taxi);
        }
        for (city, nearby) in data.nearby_locations {
            catalog.set_nearby_locations(&city, nearby);
        }
        Ok(catalog)
    }

    /// Demo catalog used when no CATALOG_PATH is configured.
    pub fn with_sample_data() -> Self {
        let mut catalog = Self::new();

        let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

        for (id, dep, arr, price, airline, service_date) in [
            ("Flight1", "Chennai", "Delhi", 6500, "IndiGo", "2025-11-05"),
            ("Flight2", "Chennai", "Delhi", 7200, "Air India", "2025-11-05"),
            ("Flight3", "Chennai", "Mumbai", 5800, "Vistara", "2025-11-05"),
            ("Flight4", "Chennai", "Delhi", 9000, "SpiceJet", "2025-11-03"),
        ] {
            catalog.add_flight(FlightOffer {
                id: id.to_string(),
                departure_city: dep.to_string(),
                arrival_city: arr.to_string(),
                price,
                airline: airline.to_string(),
                service_date: date(service_date),
            });
        }

        for (id, city, price, rating, available_from) in [
            ("Hotel0", "Delhi", 2800, 4.0, "2025-11-01"),
            ("Hotel1", "Delhi", 3000, 4.2, "2025-11-05"),
            ("Hotel2", "Delhi", 2500, 3.9, "2025-11-05"),
            ("Hotel4", "Delhi", 4500, 4.8, "2025-11-06"),
            ("HotelG1", "Gurugram", 2600, 4.1, "2025-11-03"),
            ("HotelG2", "Gurugram", 2200, 3.8, "2025-11-04"),
            ("HotelN1", "Noida", 2400, 4.0, "2025-11-02"),
            ("HotelM1", "Mumbai", 2000, 4.0, "2025-11-05"),
        ] {
            catalog.add_hotel(HotelOffer {
                id: id.to_string(),
                city: city.to_string(),
                price,
                rating,
                available_from: date(available_from),
            });
        }

        for (id, city, price) in [
            ("Taxi1", "Delhi", 900),
            ("Taxi2", "Delhi", 1200),
            ("TaxiG1", "Gurugram", 1000),
            ("Taxi3", "Mumbai", 700),
        ] {
            catalog.add_taxi(TaxiOffer {
                id: id.to_string(),
                city: city.to_string(),
                price,
            });
        }

        // NCR fallback tiers for Delhi arrivals.
        catalog.set_nearby_locations(
            "Delhi",
            NearbyLocations {
                immediate: vec!["Gurugram".to_string(), "Noida".to_string()],
                region: vec!["Ghaziabad".to_string(), "Faridabad".to_string()],
            },
        );

        catalog
    }
}
