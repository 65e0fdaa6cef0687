//! Modelo de Vehicle
//!
//! Struct tipado de la tabla `vehicles` y su conversión desde/hacia
//! filas tipadas del esquema.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::repositories::table_repository::FieldValues;
use crate::schema::{CellValue, TypedRow};

#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub plate: String,
    pub renavam: Option<String>,
    pub year: i32,
    pub purchase_price: Decimal,
    pub purchase_date: Option<NaiveDate>,
}

impl Vehicle {
    pub fn from_row(row: &TypedRow) -> Self {
        Self {
            id: row.id(),
            name: row.text("name").unwrap_or_default().to_string(),
            plate: row.text("plate").unwrap_or_default().to_string(),
            renavam: row.text("renavam").map(str::to_string),
            year: row.integer("year").unwrap_or(0) as i32,
            purchase_price: row.decimal("purchase_price").unwrap_or_default(),
            purchase_date: row.date("purchase_date"),
        }
    }
}

/// Datos de un vehículo nuevo o editado (sin id)
#[derive(Debug, Clone)]
pub struct VehicleData {
    pub name: String,
    pub plate: String,
    pub renavam: Option<String>,
    pub year: i32,
    pub purchase_price: Decimal,
    pub purchase_date: Option<NaiveDate>,
}

impl VehicleData {
    pub fn into_fields(self) -> FieldValues {
        vec![
            ("name", CellValue::Text(self.name)),
            ("plate", CellValue::Text(self.plate)),
            (
                "renavam",
                self.renavam.map(CellValue::Text).unwrap_or(CellValue::Null),
            ),
            ("year", CellValue::Integer(self.year as i64)),
            ("purchase_price", CellValue::Decimal(self.purchase_price)),
            (
                "purchase_date",
                self.purchase_date
                    .map(CellValue::Date)
                    .unwrap_or(CellValue::Null),
            ),
        ]
    }
}
