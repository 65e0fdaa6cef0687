use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::ServiceController;
use crate::dto::service_dto::{ServiceRequest, ServiceResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/", post(create_service))
        .route("/:id", get(get_service))
        .route("/:id", put(update_service))
        .route("/:id", delete(delete_service))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.services.clone());
    Ok(Json(controller.list().await?))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = ServiceController::new(state.services.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<ServiceRequest>,
) -> Result<Json<ApiResponse<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.services.clone());
    Ok(Json(controller.create(request).await?))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ServiceRequest>,
) -> Result<Json<ApiResponse<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.services.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ServiceController::new(state.services.clone());
    Ok(Json(controller.delete(id).await?))
}
