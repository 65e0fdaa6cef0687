//! Repositorios: CRUD con garantías de base de datos sobre el store
//! de planillas

pub mod provider_repository;
pub mod service_repository;
pub mod table_repository;
pub mod vehicle_repository;

pub use provider_repository::ProviderRepository;
pub use service_repository::ServiceRepository;
pub use vehicle_repository::VehicleRepository;
