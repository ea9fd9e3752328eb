use crate::db::catalog::{ServiceCatalog, TaxiFilter};
use crate::models::offer::TaxiOffer;

/// Cheapest taxi in the hotel's city, falling back to the cheapest offer
/// anywhere. Returns `None` only when the catalog has no taxis at all; a
/// missing taxi never fails the itinerary.
pub fn select_taxi(catalog: &ServiceCatalog, hotel_city: Option<&str>) -> Option<TaxiOffer> {
    let candidates = catalog.find_taxis(&TaxiFilter::default());

    if let Some(city) = hotel_city {
        if let Some(taxi) = candidates.iter().find(|t| t.city == city) {
            return Some(taxi.clone());
        }
    }

    candidates.into_iter().next()
}
