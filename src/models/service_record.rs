//! Modelo de ServiceRecord (evento de mantención)
//!
//! `due_date` es derivada: service_date + warranty_days. Se persiste
//! junto a la fila para que los filtros por vencimiento no recalculen
//! en cada lectura. Una fecha de servicio desconocida produce un
//! vencimiento desconocido, nunca "hoy".

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::repositories::table_repository::FieldValues;
use crate::schema::{CellValue, TypedRow};

#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
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

impl ServiceRecord {
    pub fn from_row(row: &TypedRow) -> Self {
        Self {
            id: row.id(),
            vehicle_id: row.integer("vehicle_id").unwrap_or(0),
            provider_id: row.integer("provider_id").unwrap_or(0),
            service_name: row.text("service_name").unwrap_or_default().to_string(),
            service_date: row.date("service_date"),
            warranty_days: row.integer("warranty_days").unwrap_or(0) as i32,
            amount: row.decimal("amount").unwrap_or_default(),
            mileage_at_service: row.integer("mileage_at_service").unwrap_or(0),
            mileage_next_service: row.integer("mileage_next_service").unwrap_or(0),
            note: row.text("note").map(str::to_string),
            due_date: row.date("due_date"),
        }
    }
}

/// Datos de un servicio nuevo o editado (sin id ni due_date, que se deriva)
#[derive(Debug, Clone)]
pub struct ServiceData {
    pub vehicle_id: i64,
    pub provider_id: i64,
    pub service_name: String,
    pub service_date: Option<NaiveDate>,
    pub warranty_days: i32,
    pub amount: Decimal,
    pub mileage_at_service: i64,
    pub mileage_next_service: i64,
    pub note: Option<String>,
}

impl ServiceData {
    /// Vencimiento de la garantía derivado de los datos cargados
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.service_date
            .map(|d| d + Duration::days(self.warranty_days as i64))
    }

    pub fn into_fields(self) -> FieldValues {
        let due_date = self.due_date();
        vec![
            ("vehicle_id", CellValue::Integer(self.vehicle_id)),
            ("provider_id", CellValue::Integer(self.provider_id)),
            ("service_name", CellValue::Text(self.service_name)),
            (
                "service_date",
                self.service_date
                    .map(CellValue::Date)
                    .unwrap_or(CellValue::Null),
            ),
            ("warranty_days", CellValue::Integer(self.warranty_days as i64)),
            ("amount", CellValue::Decimal(self.amount)),
            (
                "mileage_at_service",
                CellValue::Integer(self.mileage_at_service),
            ),
            (
                "mileage_next_service",
                CellValue::Integer(self.mileage_next_service),
            ),
            (
                "note",
                match self.note {
                    Some(v) if !v.trim().is_empty() => CellValue::Text(v),
                    _ => CellValue::Null,
                },
            ),
            (
                "due_date",
                due_date.map(CellValue::Date).unwrap_or(CellValue::Null),
            ),
        ]
    }
}
