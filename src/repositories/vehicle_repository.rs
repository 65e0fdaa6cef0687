//! Repositorio de vehículos

use std::sync::Arc;

use crate::cache::TableCache;
use crate::models::{Vehicle, VehicleData};
use crate::schema::{tables, CellValue};
use crate::utils::errors::AppError;

use super::table_repository::TableRepository;

pub struct VehicleRepository {
    table: TableRepository,
}

impl VehicleRepository {
    pub fn new(cache: Arc<TableCache>) -> Self {
        Self {
            table: TableRepository::new(&tables::VEHICLES, cache),
        }
    }

    /// Lista completa ordenada por nombre
    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let mut vehicles: Vec<Vehicle> = self
            .table
            .find_all()
            .await?
            .iter()
            .map(Vehicle::from_row)
            .collect();
        vehicles.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        Ok(self
            .table
            .find_by_id(id)
            .await?
            .map(|row| Vehicle::from_row(&row)))
    }

    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, AppError> {
        let rows = self
            .table
            .find_by("plate", &CellValue::Text(plate.to_string()))
            .await?;
        Ok(rows.first().map(Vehicle::from_row))
    }

    pub async fn insert(&self, data: VehicleData) -> Result<i64, AppError> {
        self.table.insert(data.into_fields()).await
    }

    pub async fn update(&self, id: i64, data: VehicleData) -> Result<(), AppError> {
        self.table.update(id, data.into_fields()).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.table.delete(id).await
    }
}
