use std::sync::Arc;

use validator::Validate;

use crate::dto::vehicle_dto::{VehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::models::VehicleData;
use crate::repositories::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_plate;

pub struct VehicleController {
    repository: Arc<VehicleRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<VehicleRepository>) -> Self {
        Self { repository }
    }

    fn to_data(request: VehicleRequest) -> Result<VehicleData, AppError> {
        request.validate()?;

        if request.purchase_price.is_sign_negative() {
            return Err(AppError::BadRequest(
                "El valor pagado no puede ser negativo".to_string(),
            ));
        }

        Ok(VehicleData {
            name: request.name.trim().to_string(),
            plate: normalize_plate(&request.plate),
            renavam: request.renavam.filter(|r| !r.trim().is_empty()),
            year: request.year,
            purchase_price: request.purchase_price,
            purchase_date: request.purchase_date,
        })
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", id)))?;
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn create(
        &self,
        request: VehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let data = Self::to_data(request)?;
        let id = self.repository.insert(data).await?;
        let created = self.get_by_id(id).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: VehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let data = Self::to_data(request)?;
        self.repository.update(id, data).await?;
        let updated = self.get_by_id(id).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only(
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }
}
