//! Modelos tipados de las tres entidades del sistema

pub mod provider;
pub mod service_record;
pub mod vehicle;

pub use provider::{Provider, ProviderData};
pub use service_record::{ServiceData, ServiceRecord};
pub use vehicle::{Vehicle, VehicleData};
