use std::sync::Arc;

use validator::Validate;

use crate::dto::service_dto::{ServiceRequest, ServiceResponse};
use crate::dto::ApiResponse;
use crate::models::ServiceData;
use crate::repositories::ServiceRepository;
use crate::utils::errors::AppError;

pub struct ServiceController {
    repository: Arc<ServiceRepository>,
}

impl ServiceController {
    pub fn new(repository: Arc<ServiceRepository>) -> Self {
        Self { repository }
    }

    fn to_data(request: ServiceRequest) -> Result<ServiceData, AppError> {
        request.validate()?;

        if request.amount.is_sign_negative() {
            return Err(AppError::BadRequest(
                "El valor del servicio no puede ser negativo".to_string(),
            ));
        }

        Ok(ServiceData {
            vehicle_id: request.vehicle_id,
            provider_id: request.provider_id,
            service_name: request.service_name.trim().to_string(),
            service_date: request.service_date,
            warranty_days: request.warranty_days,
            amount: request.amount,
            mileage_at_service: request.mileage_at_service,
            mileage_next_service: request.mileage_next_service,
            note: request.note,
        })
    }

    pub async fn list(&self) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.repository.find_all().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ServiceResponse, AppError> {
        let service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Servicio {} no encontrado", id)))?;
        Ok(ServiceResponse::from(service))
    }

    pub async fn create(
        &self,
        request: ServiceRequest,
    ) -> Result<ApiResponse<ServiceResponse>, AppError> {
        let data = Self::to_data(request)?;
        let id = self.repository.insert(data).await?;
        let created = self.get_by_id(id).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Servicio creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: ServiceRequest,
    ) -> Result<ApiResponse<ServiceResponse>, AppError> {
        let data = Self::to_data(request)?;
        self.repository.update(id, data).await?;
        let updated = self.get_by_id(id).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Servicio actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only(
            "Servicio eliminado exitosamente".to_string(),
        ))
    }
}
