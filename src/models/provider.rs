//! Modelo de Provider (prestador de servicios / taller)

use serde::Serialize;

use crate::repositories::table_repository::FieldValues;
use crate::schema::{CellValue, TypedRow};

#[derive(Debug, Clone, Serialize)]
pub struct Provider {
    pub id: i64,
    pub company: String,
    pub phone: Option<String>,
    pub contact_name: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub postal_code: Option<String>,
}

impl Provider {
    pub fn from_row(row: &TypedRow) -> Self {
        Self {
            id: row.id(),
            company: row.text("company").unwrap_or_default().to_string(),
            phone: row.text("phone").map(str::to_string),
            contact_name: row.text("contact_name").map(str::to_string),
            tax_id: row.text("tax_id").map(str::to_string),
            email: row.text("email").map(str::to_string),
            address: row.text("address").map(str::to_string),
            address_number: row.text("address_number").map(str::to_string),
            city: row.text("city").map(str::to_string),
            district: row.text("district").map(str::to_string),
            postal_code: row.text("postal_code").map(str::to_string),
        }
    }
}

/// Datos de un prestador nuevo o editado (sin id)
#[derive(Debug, Clone)]
pub struct ProviderData {
    pub company: String,
    pub phone: Option<String>,
    pub contact_name: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub postal_code: Option<String>,
}

fn optional_text(value: Option<String>) -> CellValue {
    match value {
        Some(v) if !v.trim().is_empty() => CellValue::Text(v),
        _ => CellValue::Null,
    }
}

impl ProviderData {
    pub fn into_fields(self) -> FieldValues {
        vec![
            ("company", CellValue::Text(self.company)),
            ("phone", optional_text(self.phone)),
            ("contact_name", optional_text(self.contact_name)),
            ("tax_id", optional_text(self.tax_id)),
            ("email", optional_text(self.email)),
            ("address", optional_text(self.address)),
            ("address_number", optional_text(self.address_number)),
            ("city", optional_text(self.city)),
            ("district", optional_text(self.district)),
            ("postal_code", optional_text(self.postal_code)),
        ]
    }
}
