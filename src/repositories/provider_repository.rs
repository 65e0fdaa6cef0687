//! Repositorio de prestadores de servicio

use std::sync::Arc;

use crate::cache::TableCache;
use crate::models::{Provider, ProviderData};
use crate::schema::{tables, CellValue};
use crate::utils::errors::AppError;

use super::table_repository::TableRepository;

pub struct ProviderRepository {
    table: TableRepository,
}

impl ProviderRepository {
    pub fn new(cache: Arc<TableCache>) -> Self {
        Self {
            table: TableRepository::new(&tables::PROVIDERS, cache),
        }
    }

    /// Lista completa ordenada por empresa
    pub async fn find_all(&self) -> Result<Vec<Provider>, AppError> {
        let mut providers: Vec<Provider> = self
            .table
            .find_all()
            .await?
            .iter()
            .map(Provider::from_row)
            .collect();
        providers.sort_by(|a, b| a.company.to_lowercase().cmp(&b.company.to_lowercase()));
        Ok(providers)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Provider>, AppError> {
        Ok(self
            .table
            .find_by_id(id)
            .await?
            .map(|row| Provider::from_row(&row)))
    }

    pub async fn find_by_company(&self, company: &str) -> Result<Option<Provider>, AppError> {
        let rows = self
            .table
            .find_by("company", &CellValue::Text(company.to_string()))
            .await?;
        Ok(rows.first().map(Provider::from_row))
    }

    pub async fn insert(&self, data: ProviderData) -> Result<i64, AppError> {
        self.table.insert(data.into_fields()).await
    }

    pub async fn update(&self, id: i64, data: ProviderData) -> Result<(), AppError> {
        self.table.update(id, data.into_fields()).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.table.delete(id).await
    }

    /// Inserta la empresa si es nueva; si ya existe, actualiza sus
    /// datos de contacto y devuelve el id existente. Es el flujo del
    /// alta de servicios, donde el taller se carga junto al servicio.
    /// Devuelve `(id, created)`.
    pub async fn upsert_by_company(&self, data: ProviderData) -> Result<(i64, bool), AppError> {
        match self.find_by_company(&data.company).await? {
            Some(existing) => {
                self.update(existing.id, data).await?;
                Ok((existing.id, false))
            }
            None => {
                let id = self.insert(data).await?;
                Ok((id, true))
            }
        }
    }
}
