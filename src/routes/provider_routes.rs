use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::ProviderController;
use crate::dto::provider_dto::{ProviderRequest, ProviderResponse, UpsertProviderResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_provider_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_providers))
        .route("/", post(create_provider))
        .route("/upsert", post(upsert_provider))
        .route("/:id", get(get_provider))
        .route("/:id", put(update_provider))
        .route("/:id", delete(delete_provider))
}

async fn list_providers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProviderResponse>>, AppError> {
    let controller = ProviderController::new(state.providers.clone());
    Ok(Json(controller.list().await?))
}

async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProviderResponse>, AppError> {
    let controller = ProviderController::new(state.providers.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_provider(
    State(state): State<AppState>,
    Json(request): Json<ProviderRequest>,
) -> Result<Json<ApiResponse<ProviderResponse>>, AppError> {
    let controller = ProviderController::new(state.providers.clone());
    Ok(Json(controller.create(request).await?))
}

async fn update_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ProviderRequest>,
) -> Result<Json<ApiResponse<ProviderResponse>>, AppError> {
    let controller = ProviderController::new(state.providers.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ProviderController::new(state.providers.clone());
    Ok(Json(controller.delete(id).await?))
}

async fn upsert_provider(
    State(state): State<AppState>,
    Json(request): Json<ProviderRequest>,
) -> Result<Json<ApiResponse<UpsertProviderResponse>>, AppError> {
    let controller = ProviderController::new(state.providers.clone());
    Ok(Json(controller.upsert(request).await?))
}
