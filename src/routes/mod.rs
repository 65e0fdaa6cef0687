//! Routers de la API

pub mod provider_routes;
pub mod report_routes;
pub mod service_routes;
pub mod vehicle_routes;
