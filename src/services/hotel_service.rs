use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::db::catalog::{HotelFilter, ServiceCatalog};
use crate::models::offer::HotelOffer;
use crate::models::trip::{HotelSelectionMethod, SelectedHotel};

/// Provisional pick accumulated while walking the nearby cascade. Once a
/// next-available hotel is held, later cities may only replace it with an
/// in-window match, never with their own next-available pick.
enum FallbackState {
    Unset,
    Held { offer: HotelOffer, city: String },
}

/// Find the best hotel for an arrival city and flight date.
///
/// Tries the arrival city within the flexible check-in window first, then
/// walks the city's nearby tiers (immediate, then region) in listed order.
/// The first in-window match anywhere stops the cascade. Cities without an
/// in-window match contribute their earliest upcoming availability as a
/// last-resort fallback.
pub fn select_hotel(
    catalog: &ServiceCatalog,
    arrival_city: &str,
    flight_date: NaiveDate,
    window_days: u32,
) -> Option<SelectedHotel> {
    let window_end = flight_date + Duration::days(i64::from(window_days));

    if let Some(offer) = best_within_window(catalog, arrival_city, flight_date, window_end) {
        return Some(SelectedHotel {
            offer,
            method: HotelSelectionMethod::ExactCityWithinWindow,
        });
    }

    let nearby = catalog.nearby_locations(arrival_city);
    let mut fallback = FallbackState::Unset;

    for city in nearby.immediate.iter().chain(nearby.region.iter()) {
        if let Some(offer) = best_within_window(catalog, city, flight_date, window_end) {
            return Some(SelectedHotel {
                offer,
                method: HotelSelectionMethod::NearbyCity(city.clone()),
            });
        }

        if let FallbackState::Unset = fallback {
            if let Some(offer) = earliest_upcoming(catalog, city, flight_date) {
                fallback = FallbackState::Held {
                    offer,
                    city: city.clone(),
                };
            }
        }
    }

    match fallback {
        FallbackState::Held { offer, city } => Some(SelectedHotel {
            offer,
            method: HotelSelectionMethod::NearbyCityNextAvail(city),
        }),
        FallbackState::Unset => None,
    }
}

/// Hotels in a city, deduplicated by id keeping the first occurrence.
fn city_candidates(catalog: &ServiceCatalog, city: &str) -> Vec<HotelOffer> {
    let mut candidates = catalog.find_hotels(&HotelFilter {
        city: Some(city.to_string()),
    });
    let mut seen = HashSet::new();
    candidates.retain(|h| seen.insert(h.id.clone()));
    candidates
}

/// Best in-window candidate for a city: cheapest first, rating breaks ties.
/// Hotels already available before the flight date always count as in-window,
/// so the window test reduces to `available_from <= window_end`.
fn best_within_window(
    catalog: &ServiceCatalog,
    city: &str,
    flight_date: NaiveDate,
    window_end: NaiveDate,
) -> Option<HotelOffer> {
    debug_assert!(flight_date <= window_end);
    let mut in_window: Vec<HotelOffer> = city_candidates(catalog, city)
        .into_iter()
        .filter(|h| h.available_from <= window_end)
        .collect();

    in_window.sort_by(|a, b| {
        a.price.cmp(&b.price).then(
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    in_window.into_iter().next()
}

/// Earliest availability on or after the flight date, even outside the window.
fn earliest_upcoming(
    catalog: &ServiceCatalog,
    city: &str,
    flight_date: NaiveDate,
) -> Option<HotelOffer> {
    city_candidates(catalog, city)
        .into_iter()
        .filter(|h| h.available_from >= flight_date)
        .min_by_key(|h| h.available_from)
}
