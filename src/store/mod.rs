//! Cliente del almacenamiento tabular externo
//!
//! El servicio remoto solo sabe dos cosas: leer una pestaña completa y
//! sobrescribirla completa. Todo lo demás (tipos, claves, unicidad,
//! joins) se reconstruye arriba de esta frontera.

pub mod memory;
pub mod sheet_client;

use async_trait::async_trait;

use crate::utils::errors::AppError;

pub use memory::InMemoryTableStore;
pub use sheet_client::SheetApiClient;

/// Contenido crudo de una pestaña: header más filas de celdas string
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Operaciones del almacenamiento tabular. `replace_table` sobrescribe
/// la pestaña entera de forma atómica desde el punto de vista del
/// llamador; no existe escritura parcial.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Lee una pestaña completa. `AppError::TableNotFound` si la
    /// pestaña no existe; fallos de transporte como `AppError::StoreIo`.
    async fn fetch_table(&self, table: &str) -> Result<RawTable, AppError>;

    /// Sobrescribe la pestaña completa (header incluido)
    async fn replace_table(
        &self,
        table: &str,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<(), AppError>;
}
