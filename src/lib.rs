//! Control de flota: vehículos, prestadores y servicios de mantención
//! sobre un almacenamiento tabular que solo sabe leer y sobrescribir
//! pestañas completas.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construye el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/providers", routes::provider_routes::create_provider_router())
        .nest("/api/services", routes::service_routes::create_service_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-control",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
