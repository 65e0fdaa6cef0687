//! Almacenamiento tabular en memoria
//!
//! Implementación de `TableStore` sobre un HashMap. Se usa en los tests
//! de integración y con `STORAGE_MODE=memory` para correr el servidor
//! sin planilla remota.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RawTable, TableStore};
use crate::schema::TableSchema;
use crate::utils::errors::AppError;

#[derive(Default)]
pub struct InMemoryTableStore {
    tables: RwLock<HashMap<String, RawTable>>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea las pestañas vacías de los esquemas dados, solo con header
    pub fn with_schemas(schemas: &[&'static TableSchema]) -> Self {
        let mut tables = HashMap::new();
        for schema in schemas {
            tables.insert(
                schema.name.to_string(),
                RawTable {
                    header: schema.header(),
                    rows: Vec::new(),
                },
            );
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Siembra una pestaña con contenido arbitrario (tests)
    pub async fn seed(&self, table: &str, header: Vec<String>, rows: Vec<Vec<String>>) {
        self.tables
            .write()
            .await
            .insert(table.to_string(), RawTable { header, rows });
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn fetch_table(&self, table: &str) -> Result<RawTable, AppError> {
        self.tables
            .read()
            .await
            .get(table)
            .cloned()
            .ok_or_else(|| AppError::TableNotFound(table.to_string()))
    }

    async fn replace_table(
        &self,
        table: &str,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if !tables.contains_key(table) {
            return Err(AppError::TableNotFound(table.to_string()));
        }
        tables.insert(table.to_string(), RawTable { header, rows });
        Ok(())
    }
}
