//! Configuración de cache
//!
//! Este módulo contiene la configuración para el cache de lecturas.

use serde::{Deserialize, Serialize};

/// Configuración del cache de snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Vida útil de un snapshot de tabla, en segundos
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: 5 }
    }
}
