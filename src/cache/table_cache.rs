//! Cache de snapshots de tabla con TTL
//!
//! Único mecanismo de control de frescura del sistema: cada lectura
//! sirve el snapshot cacheado mientras no venza el TTL, y toda
//! escritura exitosa invalida la tabla afectada antes de retornar
//! (read-your-writes). Otros lectores pueden ver datos viejos hasta
//! el próximo vencimiento; eso es lo documentado, no un bug.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use super::CacheConfig;
use crate::schema::{coerce_row, TableSchema, TypedRow};
use crate::store::TableStore;
use crate::utils::errors::AppError;

struct CacheEntry {
    rows: Arc<Vec<TypedRow>>,
    fetched_at: Instant,
}

/// Cache de tablas coercionadas, una entrada por pestaña
pub struct TableCache {
    store: Arc<dyn TableStore>,
    ttl: Duration,
    entries: RwLock<HashMap<&'static str, CacheEntry>>,
}

impl TableCache {
    pub fn new(store: Arc<dyn TableStore>, config: CacheConfig) -> Self {
        Self {
            store,
            ttl: Duration::from_secs(config.ttl_seconds),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> Arc<dyn TableStore> {
        self.store.clone()
    }

    /// Snapshot tipado de una tabla. Dentro del TTL devuelve el
    /// snapshot cacheado sin tocar el store; vencido o invalidado,
    /// relee la pestaña completa y la coerciona.
    pub async fn snapshot(
        &self,
        schema: &'static TableSchema,
    ) -> Result<Arc<Vec<TypedRow>>, AppError> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(schema.name) {
                if entry.fetched_at.elapsed() < self.ttl {
                    debug!("📥 Cache HIT para tabla '{}'", schema.name);
                    return Ok(entry.rows.clone());
                }
            }
        }

        debug!("❌ Cache MISS para tabla '{}', releyendo", schema.name);
        let raw = self.store.fetch_table(schema.name).await?;
        let rows: Vec<TypedRow> = raw
            .rows
            .iter()
            .map(|r| coerce_row(schema, &raw.header, r))
            .collect();
        let rows = Arc::new(rows);

        let mut entries = self.entries.write().await;
        entries.insert(
            schema.name,
            CacheEntry {
                rows: rows.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(rows)
    }

    /// Fuerza que el próximo snapshot de la tabla relea el store
    pub async fn invalidate(&self, table: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(table).is_some() {
            debug!("🗑️ Cache invalidado para tabla '{}'", table);
        }
    }
}
