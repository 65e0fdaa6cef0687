//! Esquema de tablas y coerción de celdas
//!
//! El servicio de planillas entrega celdas sin tipo (strings sueltos).
//! Este módulo es la única frontera donde esos valores crudos se
//! convierten a celdas tipadas y de vuelta; nada por encima de aquí
//! ve valores sin tipo.
//!
//! La coerción nunca falla: números malformados se sustituyen por 0
//! (queda registrado vía `tracing::warn!`), fechas malformadas o
//! ausentes se vuelven `Null` ("fecha desconocida") y se propagan así,
//! nunca se rellenan con "hoy".

pub mod tables;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

/// Tipo declarado de una columna
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Decimal,
    Date,
    Text,
}

/// Definición de una columna
#[derive(Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    /// Única entre filas, sin contar la clave primaria (placa, empresa)
    pub unique: bool,
    pub nullable: bool,
}

/// Tabla dependiente que referencia a esta por clave foránea
#[derive(Debug)]
pub struct Dependent {
    pub schema: &'static TableSchema,
    pub fk_column: &'static str,
}

/// Esquema de una tabla: nombre, columnas en orden declarado y
/// dependientes que bloquean su borrado. La primera columna es
/// siempre la clave primaria entera `id`.
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub dependents: &'static [Dependent],
}

impl TableSchema {
    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.to_string()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Columnas únicas no-clave
    pub fn unique_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.unique)
    }
}

/// Valor tipado de una celda. `Null` significa "ausente":
/// fecha desconocida o texto vacío en columna nullable.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Decimal(Decimal),
    Date(NaiveDate),
    Text(String),
    Null,
}

static NULL_CELL: CellValue = CellValue::Null;

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            CellValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Forma cruda canónica para escribir de vuelta a la planilla.
    /// Debe ser sin pérdida para todo tipo: enteros sin artefactos
    /// fraccionales, decimales con su escala, fechas como YYYY-MM-DD,
    /// `Null` como celda vacía.
    pub fn to_raw(&self) -> String {
        match self {
            CellValue::Integer(v) => v.to_string(),
            CellValue::Decimal(v) => v.to_string(),
            CellValue::Date(v) => v.format("%Y-%m-%d").to_string(),
            CellValue::Text(v) => v.clone(),
            CellValue::Null => String::new(),
        }
    }
}

impl ColumnType {
    /// Celda por defecto para una fila recién construida
    pub fn default_cell(&self) -> CellValue {
        match self {
            ColumnType::Integer => CellValue::Integer(0),
            ColumnType::Decimal => CellValue::Decimal(Decimal::ZERO),
            ColumnType::Date | ColumnType::Text => CellValue::Null,
        }
    }

    /// Coerción de una celda cruda. Devuelve la celda tipada y si se
    /// aplicó el default por valor malformado (el resultado observable
    /// "CoercionDefaulted"; una celda vacía no cuenta como malformada).
    pub fn coerce(&self, raw: &str) -> (CellValue, bool) {
        let trimmed = raw.trim();
        match self {
            ColumnType::Integer => {
                if trimmed.is_empty() {
                    return (CellValue::Integer(0), false);
                }
                if let Ok(v) = trimmed.parse::<i64>() {
                    return (CellValue::Integer(v), false);
                }
                // Las planillas a veces devuelven enteros como "50000.0"
                if let Ok(v) = trimmed.parse::<f64>() {
                    if v.fract() == 0.0 {
                        return (CellValue::Integer(v as i64), false);
                    }
                }
                (CellValue::Integer(0), true)
            }
            ColumnType::Decimal => {
                if trimmed.is_empty() {
                    return (CellValue::Decimal(Decimal::ZERO), false);
                }
                match trimmed.parse::<Decimal>() {
                    Ok(v) => (CellValue::Decimal(v), false),
                    Err(_) => (CellValue::Decimal(Decimal::ZERO), true),
                }
            }
            ColumnType::Date => {
                if trimmed.is_empty() {
                    return (CellValue::Null, false);
                }
                match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                    Ok(v) => (CellValue::Date(v), false),
                    Err(_) => (CellValue::Null, true),
                }
            }
            ColumnType::Text => {
                if trimmed.is_empty() {
                    (CellValue::Null, false)
                } else {
                    (CellValue::Text(raw.to_string()), false)
                }
            }
        }
    }
}

/// Fila tipada, alineada con el orden de columnas declarado de su esquema
#[derive(Debug, Clone)]
pub struct TypedRow {
    schema: &'static TableSchema,
    values: Vec<CellValue>,
}

impl TypedRow {
    /// Fila nueva con celdas por defecto
    pub fn new(schema: &'static TableSchema) -> Self {
        let values = schema.columns.iter().map(|c| c.ty.default_cell()).collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    pub fn get(&self, column: &str) -> &CellValue {
        match self.schema.index_of(column) {
            Some(i) => &self.values[i],
            None => &NULL_CELL,
        }
    }

    /// Sobrescribe una celda; columnas desconocidas se ignoran
    pub fn set(&mut self, column: &str, value: CellValue) {
        if let Some(i) = self.schema.index_of(column) {
            self.values[i] = value;
        }
    }

    /// Clave primaria (primera columna, por convención del esquema)
    pub fn id(&self) -> i64 {
        self.values
            .first()
            .and_then(|c| c.as_integer())
            .unwrap_or(0)
    }

    pub fn integer(&self, column: &str) -> Option<i64> {
        self.get(column).as_integer()
    }

    pub fn decimal(&self, column: &str) -> Option<Decimal> {
        self.get(column).as_decimal()
    }

    pub fn date(&self, column: &str) -> Option<NaiveDate> {
        self.get(column).as_date()
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).as_text()
    }

    /// Fila cruda en el orden declarado, lista para `replace_table`
    pub fn to_raw(&self) -> Vec<String> {
        self.values.iter().map(CellValue::to_raw).collect()
    }
}

/// Coerciona una fila cruda contra su esquema. Las celdas se buscan en
/// el header recibido por nombre, así la planilla puede tener columnas
/// reordenadas o extra sin corromper la fila tipada; columnas ausentes
/// coercionan como celda vacía.
pub fn coerce_row(schema: &'static TableSchema, header: &[String], raw: &[String]) -> TypedRow {
    let mut row = TypedRow::new(schema);
    for column in schema.columns {
        let cell = header
            .iter()
            .position(|h| h.trim() == column.name)
            .and_then(|i| raw.get(i))
            .map(String::as_str)
            .unwrap_or("");
        let (value, defaulted) = column.ty.coerce(cell);
        if defaulted {
            warn!(
                table = schema.name,
                column = column.name,
                raw = cell,
                "valor malformado sustituido por default en coerción"
            );
        }
        row.set(column.name, value);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn coerciona_enteros_malformados_a_cero() {
        assert_eq!(ColumnType::Integer.coerce("123"), (CellValue::Integer(123), false));
        assert_eq!(ColumnType::Integer.coerce("50000.0"), (CellValue::Integer(50000), false));
        assert_eq!(ColumnType::Integer.coerce(""), (CellValue::Integer(0), false));
        assert_eq!(ColumnType::Integer.coerce("abc"), (CellValue::Integer(0), true));
    }

    #[test]
    fn coerciona_decimales() {
        let (v, flagged) = ColumnType::Decimal.coerce("150.00");
        assert_eq!(v, CellValue::Decimal(Decimal::from_str("150.00").unwrap()));
        assert!(!flagged);
        assert_eq!(
            ColumnType::Decimal.coerce("n/a"),
            (CellValue::Decimal(Decimal::ZERO), true)
        );
    }

    #[test]
    fn fecha_malformada_queda_ausente_no_hoy() {
        assert_eq!(ColumnType::Date.coerce(""), (CellValue::Null, false));
        let (v, flagged) = ColumnType::Date.coerce("31/12/2024");
        assert_eq!(v, CellValue::Null);
        assert!(flagged);
    }

    #[test]
    fn serializacion_cruda_es_canonica() {
        assert_eq!(CellValue::Integer(42).to_raw(), "42");
        assert_eq!(
            CellValue::Decimal(Decimal::from_str("30000.00").unwrap()).to_raw(),
            "30000.00"
        );
        assert_eq!(
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()).to_raw(),
            "2024-01-10"
        );
        assert_eq!(CellValue::Null.to_raw(), "");
    }

    #[test]
    fn coercion_es_idempotente_tras_primera_pasada() {
        let schema = &tables::VEHICLES;
        let header = schema.header();
        let raw = vec![
            "1".to_string(),
            "Gol".to_string(),
            "ABC1234".to_string(),
            "".to_string(),
            "2020".to_string(),
            "30000.00".to_string(),
            "fecha-rota".to_string(),
        ];
        let first = coerce_row(schema, &header, &raw).to_raw();
        let second = coerce_row(schema, &header, &first).to_raw();
        assert_eq!(first, second);
        // La fecha rota quedó ausente, no "hoy"
        assert_eq!(first[6], "");
    }

    #[test]
    fn coerce_row_tolera_header_reordenado() {
        let schema = &tables::VEHICLES;
        let header = vec!["plate".to_string(), "id".to_string(), "name".to_string()];
        let raw = vec!["ABC1234".to_string(), "7".to_string(), "Gol".to_string()];
        let row = coerce_row(schema, &header, &raw);
        assert_eq!(row.id(), 7);
        assert_eq!(row.text("plate"), Some("ABC1234"));
        assert_eq!(row.text("name"), Some("Gol"));
        // Columnas ausentes del header coercionan a default
        assert_eq!(row.integer("year"), Some(0));
    }
}
