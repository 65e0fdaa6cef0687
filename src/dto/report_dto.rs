use chrono::NaiveDate;
use serde::Deserialize;

// Query del historial de servicios: rango inclusivo opcional.
// Deben venir ambas fechas o ninguna.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}
