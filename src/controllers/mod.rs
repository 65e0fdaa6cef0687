//! Controllers: validación de entrada y orquestación de repositorios

pub mod provider_controller;
pub mod report_controller;
pub mod service_controller;
pub mod vehicle_controller;

pub use provider_controller::ProviderController;
pub use report_controller::ReportController;
pub use service_controller::ServiceController;
pub use vehicle_controller::VehicleController;
