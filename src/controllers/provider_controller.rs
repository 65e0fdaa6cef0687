use std::sync::Arc;

use validator::Validate;

use crate::dto::provider_dto::{ProviderRequest, ProviderResponse, UpsertProviderResponse};
use crate::dto::ApiResponse;
use crate::models::ProviderData;
use crate::repositories::ProviderRepository;
use crate::utils::errors::AppError;

pub struct ProviderController {
    repository: Arc<ProviderRepository>,
}

impl ProviderController {
    pub fn new(repository: Arc<ProviderRepository>) -> Self {
        Self { repository }
    }

    fn to_data(request: ProviderRequest) -> Result<ProviderData, AppError> {
        request.validate()?;

        Ok(ProviderData {
            company: request.company.trim().to_string(),
            phone: request.phone,
            contact_name: request.contact_name,
            tax_id: request.tax_id,
            email: request.email,
            address: request.address,
            address_number: request.address_number,
            city: request.city,
            district: request.district,
            postal_code: request.postal_code,
        })
    }

    pub async fn list(&self) -> Result<Vec<ProviderResponse>, AppError> {
        let providers = self.repository.find_all().await?;
        Ok(providers.into_iter().map(ProviderResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ProviderResponse, AppError> {
        let provider = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Prestador {} no encontrado", id)))?;
        Ok(ProviderResponse::from(provider))
    }

    pub async fn create(
        &self,
        request: ProviderRequest,
    ) -> Result<ApiResponse<ProviderResponse>, AppError> {
        let data = Self::to_data(request)?;
        let id = self.repository.insert(data).await?;
        let created = self.get_by_id(id).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Prestador creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: ProviderRequest,
    ) -> Result<ApiResponse<ProviderResponse>, AppError> {
        let data = Self::to_data(request)?;
        self.repository.update(id, data).await?;
        let updated = self.get_by_id(id).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Prestador actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only(
            "Prestador eliminado exitosamente".to_string(),
        ))
    }

    /// Alta-o-actualización por empresa, el flujo del formulario de
    /// servicios: si la empresa existe se actualizan sus datos de
    /// contacto y se reutiliza su id
    pub async fn upsert(
        &self,
        request: ProviderRequest,
    ) -> Result<ApiResponse<UpsertProviderResponse>, AppError> {
        let data = Self::to_data(request)?;
        let (id, created) = self.repository.upsert_by_company(data).await?;

        let message = if created {
            "Prestador creado exitosamente".to_string()
        } else {
            "Datos del prestador actualizados".to_string()
        };
        Ok(ApiResponse::success_with_message(
            UpsertProviderResponse { id, created },
            message,
        ))
    }
}
