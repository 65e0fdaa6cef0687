use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Provider;

// Request para crear, actualizar o upsertar un prestador
#[derive(Debug, Deserialize, Validate)]
pub struct ProviderRequest {
    #[validate(length(min = 1, max = 100))]
    pub company: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 100))]
    pub contact_name: Option<String>,

    #[validate(length(max = 18))]
    pub tax_id: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[validate(length(max = 20))]
    pub address_number: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 100))]
    pub district: Option<String>,

    #[validate(length(max = 20))]
    pub postal_code: Option<String>,
}

// Response de prestador
#[derive(Debug, Serialize)]
pub struct ProviderResponse {
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

impl From<Provider> for ProviderResponse {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            company: provider.company,
            phone: provider.phone,
            contact_name: provider.contact_name,
            tax_id: provider.tax_id,
            email: provider.email,
            address: provider.address,
            address_number: provider.address_number,
            city: provider.city,
            district: provider.district,
            postal_code: provider.postal_code,
        }
    }
}

// Response del upsert: distingue alta de actualización
#[derive(Debug, Serialize)]
pub struct UpsertProviderResponse {
    pub id: i64,
    pub created: bool,
}
