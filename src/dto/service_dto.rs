use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ServiceRecord;

// Request para crear o actualizar un servicio. `due_date` no se
// recibe: siempre se deriva de service_date + warranty_days.
#[derive(Debug, Deserialize, Validate)]
pub struct ServiceRequest {
    pub vehicle_id: i64,

    pub provider_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub service_name: String,

    pub service_date: Option<NaiveDate>,

    #[validate(range(min = 0, max = 3650))]
    pub warranty_days: i32,

    pub amount: Decimal,

    #[validate(range(min = 0))]
    pub mileage_at_service: i64,

    #[validate(range(min = 0))]
    pub mileage_next_service: i64,

    #[validate(length(max = 50))]
    pub note: Option<String>,
}

// Response de servicio
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub provider_id: i64,
    pub service_name: String,
    pub service_date: Option<NaiveDate>,
    pub warranty_days: i32,
    pub amount: Decimal,
    pub mileage_at_service: i64,
    pub mileage_next_service: i64,
    pub note: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl From<ServiceRecord> for ServiceResponse {
    fn from(service: ServiceRecord) -> Self {
        Self {
            id: service.id,
            vehicle_id: service.vehicle_id,
            provider_id: service.provider_id,
            service_name: service.service_name,
            service_date: service.service_date,
            warranty_days: service.warranty_days,
            amount: service.amount,
            mileage_at_service: service.mileage_at_service,
            mileage_next_service: service.mileage_next_service,
            note: service.note,
            due_date: service.due_date,
        }
    }
}
