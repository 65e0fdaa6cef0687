//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// "remote" (servicio de planillas) o "memory" (desarrollo local)
    pub storage_mode: String,
    pub sheet_api_base_url: Option<String>,
    pub sheet_id: Option<String>,
    pub sheet_api_token: Option<String>,
    pub cache_ttl_seconds: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            storage_mode: env::var("STORAGE_MODE").unwrap_or_else(|_| "remote".to_string()),
            sheet_api_base_url: env::var("SHEET_API_BASE_URL").ok(),
            sheet_id: env::var("SHEET_ID").ok(),
            sheet_api_token: env::var("SHEET_API_TOKEN").ok(),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("CACHE_TTL_SECONDS must be a valid number"),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
