use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;

// Request para crear o actualizar un vehículo. El formulario siempre
// envía el registro completo; no hay actualización parcial.
#[derive(Debug, Deserialize, Validate)]
pub struct VehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 10))]
    pub plate: String,

    #[validate(length(max = 11))]
    pub renavam: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    pub purchase_price: Decimal,

    pub purchase_date: Option<NaiveDate>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub name: String,
    pub plate: String,
    pub renavam: Option<String>,
    pub year: i32,
    pub purchase_price: Decimal,
    pub purchase_date: Option<NaiveDate>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            plate: vehicle.plate,
            renavam: vehicle.renavam,
            year: vehicle.year,
            purchase_price: vehicle.purchase_price,
            purchase_date: vehicle.purchase_date,
        }
    }
}
