pub mod explanation_service;
pub mod flight_service;
pub mod hotel_service;
pub mod planner_service;
pub mod pricing_service;
pub mod taxi_service;
