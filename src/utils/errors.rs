//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Una pestaña declarada no existe en la planilla remota
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Fallo de lectura/escritura contra el servicio de planillas.
    /// No se reintenta: la política de retry pertenece al transporte.
    #[error("Store I/O error: {0}")]
    StoreIo(String),

    /// Valor duplicado en una columna declarada como única (placa, empresa)
    #[error("Uniqueness violation: {0}")]
    UniquenessViolation(String),

    /// La fila objetivo no existe
    #[error("Not found: {0}")]
    NotFound(String),

    /// Borrado bloqueado por filas dependientes (servicios vinculados)
    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::TableNotFound(table) => {
                eprintln!("Table not found in backing store: {}", table);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Table Not Found".to_string(),
                        message: format!("La tabla '{}' no existe en la planilla", table),
                        details: None,
                        code: Some("TABLE_NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::StoreIo(msg) => {
                eprintln!("Store I/O error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Store I/O Error".to_string(),
                        message: "Error comunicándose con el servicio de planillas".to_string(),
                        details: Some(json!({ "store_error": msg })),
                        code: Some("STORE_IO_ERROR".to_string()),
                    },
                )
            }

            AppError::UniquenessViolation(msg) => {
                eprintln!("Uniqueness violation: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("DUPLICATE_VALUE".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                eprintln!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::ReferentialIntegrity(msg) => {
                eprintln!("Referential integrity violation: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("HAS_DEPENDENTS".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                eprintln!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", resource, id))
}

/// Función helper para crear errores de valor duplicado
pub fn duplicate_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::UniquenessViolation(format!(
        "{} with {} '{}' already exists",
        resource, field, value
    ))
}

/// Función helper para borrados bloqueados por dependientes
pub fn has_dependents_error(resource: &str, id: i64, dependent: &str) -> AppError {
    AppError::ReferentialIntegrity(format!(
        "Cannot delete {} {}: {} rows still reference it",
        resource, id, dependent
    ))
}
