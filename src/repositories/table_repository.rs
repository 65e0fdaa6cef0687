//! Motor CRUD genérico sobre el store de planillas
//!
//! Una instancia por tabla. Cada escritura sigue el protocolo
//! snapshot → mutación → replace: lee la tabla completa (vía cache),
//! la muta en memoria y la sobrescribe entera en el store, invalidando
//! el cache antes de retornar. `replace_snapshot` es el único punto de
//! escritura, así un token de concurrencia optimista podría sumarse
//! después sin cambiar el contrato CRUD.
//!
//! La asignación de ids (max + 1) y los chequeos de unicidad y de
//! integridad referencial se calculan contra el snapshot. Dentro de un
//! proceso, el mutex por tabla serializa los ciclos lectura-escritura;
//! entre procesos el store sigue siendo last-writer-wins a granularidad
//! de tabla.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::cache::TableCache;
use crate::schema::{CellValue, ColumnType, TableSchema, TypedRow};
use crate::store::TableStore;
use crate::utils::errors::{duplicate_error, has_dependents_error, not_found_error, AppError};

/// Pares columna→valor para insert/update
pub type FieldValues = Vec<(&'static str, CellValue)>;

pub struct TableRepository {
    schema: &'static TableSchema,
    cache: Arc<TableCache>,
    store: Arc<dyn TableStore>,
    write_lock: Mutex<()>,
}

impl TableRepository {
    pub fn new(schema: &'static TableSchema, cache: Arc<TableCache>) -> Self {
        Self {
            schema,
            store: cache.store(),
            cache,
            write_lock: Mutex::new(()),
        }
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Todas las filas de la tabla, vía cache
    pub async fn find_all(&self) -> Result<Vec<TypedRow>, AppError> {
        let rows = self.cache.snapshot(self.schema).await?;
        Ok(rows.as_ref().clone())
    }

    /// Filtro por igualdad sobre una columna. Para columnas enteras
    /// (claves) el valor se coerciona a entero antes de comparar.
    pub async fn find_by(&self, column: &str, value: &CellValue) -> Result<Vec<TypedRow>, AppError> {
        let needle = self.normalize_filter(column, value);
        let rows = self.cache.snapshot(self.schema).await?;
        Ok(rows
            .iter()
            .filter(|row| cells_equal(row.get(column), &needle))
            .cloned()
            .collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<TypedRow>, AppError> {
        let rows = self.cache.snapshot(self.schema).await?;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    /// Inserta una fila nueva con id = max(existentes) + 1 (1 si la
    /// tabla está vacía) y devuelve el id asignado
    pub async fn insert(&self, fields: FieldValues) -> Result<i64, AppError> {
        let _guard = self.write_lock.lock().await;

        let snapshot = self.cache.snapshot(self.schema).await?;
        let new_id = snapshot.iter().map(TypedRow::id).max().unwrap_or(0) + 1;

        self.check_unique(&snapshot, &fields, None)?;

        let mut row = TypedRow::new(self.schema);
        row.set("id", CellValue::Integer(new_id));
        for (column, value) in fields {
            if column != "id" {
                row.set(column, value);
            }
        }

        let mut updated = snapshot.as_ref().clone();
        updated.push(row);
        self.replace_snapshot(updated).await?;

        info!("✅ Insert en '{}' con id {}", self.schema.name, new_id);
        Ok(new_id)
    }

    /// Sobrescribe campo a campo la fila con ese id; el id es inmutable
    pub async fn update(&self, id: i64, fields: FieldValues) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let snapshot = self.cache.snapshot(self.schema).await?;
        let position = snapshot
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| not_found_error(self.schema.name, id))?;

        self.check_unique(&snapshot, &fields, Some(id))?;

        let mut updated = snapshot.as_ref().clone();
        for (column, value) in fields {
            if column != "id" {
                updated[position].set(column, value);
            }
        }
        self.replace_snapshot(updated).await?;

        info!("✅ Update en '{}' id {}", self.schema.name, id);
        Ok(())
    }

    /// Elimina la fila con ese id, salvo que otra tabla la referencie
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let snapshot = self.cache.snapshot(self.schema).await?;
        if !snapshot.iter().any(|row| row.id() == id) {
            return Err(not_found_error(self.schema.name, id));
        }

        for dependent in self.schema.dependents {
            let dependent_rows = self.cache.snapshot(dependent.schema).await?;
            if dependent_rows
                .iter()
                .any(|row| row.integer(dependent.fk_column) == Some(id))
            {
                return Err(has_dependents_error(
                    self.schema.name,
                    id,
                    dependent.schema.name,
                ));
            }
        }

        let updated: Vec<TypedRow> = snapshot
            .iter()
            .filter(|row| row.id() != id)
            .cloned()
            .collect();
        self.replace_snapshot(updated).await?;

        info!("🗑️ Delete en '{}' id {}", self.schema.name, id);
        Ok(())
    }

    /// Único paso de escritura: serializa el snapshot mutado completo,
    /// lo sobrescribe en el store e invalida el cache de la tabla
    async fn replace_snapshot(&self, rows: Vec<TypedRow>) -> Result<(), AppError> {
        let raw: Vec<Vec<String>> = rows.iter().map(TypedRow::to_raw).collect();
        self.store
            .replace_table(self.schema.name, self.schema.header(), raw)
            .await?;
        self.cache.invalidate(self.schema.name).await;
        Ok(())
    }

    /// Rechaza valores duplicados en columnas declaradas únicas.
    /// En update, la propia fila (`exclude_id`) no cuenta como duplicado.
    fn check_unique(
        &self,
        snapshot: &[TypedRow],
        fields: &FieldValues,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        for column in self.schema.unique_columns() {
            let Some((_, value)) = fields.iter().find(|(name, _)| *name == column.name) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let taken = snapshot.iter().any(|row| {
                Some(row.id()) != exclude_id && cells_equal(row.get(column.name), value)
            });
            if taken {
                return Err(duplicate_error(
                    self.schema.name,
                    column.name,
                    &value.to_raw(),
                ));
            }
        }
        Ok(())
    }

    fn normalize_filter(&self, column: &str, value: &CellValue) -> CellValue {
        let is_integer_column = self
            .schema
            .column(column)
            .map(|c| c.ty == ColumnType::Integer)
            .unwrap_or(false);
        if is_integer_column {
            if let CellValue::Text(raw) = value {
                let (coerced, _) = ColumnType::Integer.coerce(raw);
                return coerced;
            }
        }
        value.clone()
    }
}

/// Igualdad de celdas para filtros y unicidad: texto comparado sin
/// espacios al borde, el resto por valor tipado
fn cells_equal(a: &CellValue, b: &CellValue) -> bool {
    match (a, b) {
        (CellValue::Text(x), CellValue::Text(y)) => x.trim() == y.trim(),
        _ => a == b,
    }
}
