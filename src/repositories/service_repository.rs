//! Repositorio de servicios de mantención

use std::sync::Arc;

use crate::cache::TableCache;
use crate::models::{ServiceData, ServiceRecord};
use crate::schema::{tables, CellValue};
use crate::utils::errors::AppError;

use super::table_repository::TableRepository;

pub struct ServiceRepository {
    table: TableRepository,
}

impl ServiceRepository {
    pub fn new(cache: Arc<TableCache>) -> Self {
        Self {
            table: TableRepository::new(&tables::SERVICES, cache),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<ServiceRecord>, AppError> {
        Ok(self
            .table
            .find_all()
            .await?
            .iter()
            .map(ServiceRecord::from_row)
            .collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ServiceRecord>, AppError> {
        Ok(self
            .table
            .find_by_id(id)
            .await?
            .map(|row| ServiceRecord::from_row(&row)))
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<ServiceRecord>, AppError> {
        Ok(self
            .table
            .find_by("vehicle_id", &CellValue::Integer(vehicle_id))
            .await?
            .iter()
            .map(ServiceRecord::from_row)
            .collect())
    }

    /// Inserta el servicio con su `due_date` derivada
    pub async fn insert(&self, data: ServiceData) -> Result<i64, AppError> {
        self.table.insert(data.into_fields()).await
    }

    /// Actualiza el servicio recalculando `due_date`
    pub async fn update(&self, id: i64, data: ServiceData) -> Result<(), AppError> {
        self.table.update(id, data.into_fields()).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.table.delete(id).await
    }
}
