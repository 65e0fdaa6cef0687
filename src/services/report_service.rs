//! Motor de joins para reportes
//!
//! Reconstruye en el cliente el equivalente de un JOIN de tres tablas
//! con filtro por rango de fechas: la vista "historial de servicios"
//! que alimenta el resumen de gastos y el historial detallado. Solo
//! lee y compone; nunca muta tablas.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Provider, Vehicle};
use crate::repositories::{ProviderRepository, ServiceRepository, VehicleRepository};
use crate::utils::errors::AppError;

/// Una fila del historial: un servicio con sus campos de vehículo y
/// prestador resueltos. Campos `None` cuando la referencia no existe;
/// el servicio nunca se descarta por una referencia colgante.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHistoryRow {
    pub service_id: i64,
    pub service_name: String,
    pub service_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub warranty_days: i32,
    pub amount: Decimal,
    pub mileage_at_service: i64,
    pub mileage_next_service: i64,
    pub note: Option<String>,
    pub vehicle_id: i64,
    pub vehicle_name: Option<String>,
    pub plate: Option<String>,
    pub provider_id: i64,
    pub company: Option<String>,
    pub city: Option<String>,
}

/// Historial detallado: agrega los días restantes de garantía
#[derive(Debug, Clone, Serialize)]
pub struct DetailedHistoryRow {
    #[serde(flatten)]
    pub row: ServiceHistoryRow,
    /// `None` cuando el vencimiento es desconocido; un dato faltante
    /// no se disfraza de "vence hoy"
    pub days_until_due: Option<i64>,
}

/// Resumen de gastos agrupado por vehículo
#[derive(Debug, Clone, Serialize)]
pub struct SpendSummaryRow {
    pub vehicle_name: String,
    pub total_amount: Decimal,
}

pub struct ReportService {
    services: Arc<ServiceRepository>,
    vehicles: Arc<VehicleRepository>,
    providers: Arc<ProviderRepository>,
}

impl ReportService {
    pub fn new(
        services: Arc<ServiceRepository>,
        vehicles: Arc<VehicleRepository>,
        providers: Arc<ProviderRepository>,
    ) -> Self {
        Self {
            services,
            vehicles,
            providers,
        }
    }

    /// Historial de servicios: left-join servicio→vehículo→prestador,
    /// filtro opcional por rango inclusivo de fecha de servicio y
    /// orden por fecha descendente (fechas desconocidas al final).
    ///
    /// Si cualquiera de las tres tablas está vacía el resultado es
    /// vacío: no hay joins parciales contra una tabla vacía.
    pub async fn service_history(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<ServiceHistoryRow>, AppError> {
        let services = self.services.find_all().await?;
        let vehicles = self.vehicles.find_all().await?;
        let providers = self.providers.find_all().await?;

        if services.is_empty() || vehicles.is_empty() || providers.is_empty() {
            return Ok(Vec::new());
        }

        let vehicles_by_id: HashMap<i64, &Vehicle> =
            vehicles.iter().map(|v| (v.id, v)).collect();
        let providers_by_id: HashMap<i64, &Provider> =
            providers.iter().map(|p| (p.id, p)).collect();

        let mut rows: Vec<ServiceHistoryRow> = services
            .into_iter()
            .map(|service| {
                let vehicle = vehicles_by_id.get(&service.vehicle_id);
                let provider = providers_by_id.get(&service.provider_id);
                ServiceHistoryRow {
                    service_id: service.id,
                    service_name: service.service_name,
                    service_date: service.service_date,
                    due_date: service.due_date,
                    warranty_days: service.warranty_days,
                    amount: service.amount,
                    mileage_at_service: service.mileage_at_service,
                    mileage_next_service: service.mileage_next_service,
                    note: service.note,
                    vehicle_id: service.vehicle_id,
                    vehicle_name: vehicle.map(|v| v.name.clone()),
                    plate: vehicle.map(|v| v.plate.clone()),
                    provider_id: service.provider_id,
                    company: provider.map(|p| p.company.clone()),
                    city: provider.and_then(|p| p.city.clone()),
                }
            })
            .collect();

        if let Some((start, end)) = range {
            // Con filtro activo, las filas sin fecha quedan fuera:
            // no hay forma de saber si caen en el rango
            rows.retain(|row| {
                row.service_date
                    .map(|d| d >= start && d <= end)
                    .unwrap_or(false)
            });
        }

        rows.sort_by_key(|row| Reverse(row.service_date));
        Ok(rows)
    }

    /// Historial detallado con días restantes hasta el vencimiento
    pub async fn detailed_history(&self) -> Result<Vec<DetailedHistoryRow>, AppError> {
        self.detailed_history_at(Utc::now().date_naive()).await
    }

    pub async fn detailed_history_at(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<DetailedHistoryRow>, AppError> {
        let rows = self.service_history(None).await?;
        Ok(rows
            .into_iter()
            .map(|row| DetailedHistoryRow {
                days_until_due: row.due_date.map(|due| (due - today).num_days()),
                row,
            })
            .collect())
    }

    /// Total gastado por vehículo, de mayor a menor
    pub async fn spend_summary(&self) -> Result<Vec<SpendSummaryRow>, AppError> {
        let rows = self.service_history(None).await?;

        let mut totals: HashMap<String, Decimal> = HashMap::new();
        for row in rows {
            let vehicle_name = row
                .vehicle_name
                .unwrap_or_else(|| format!("(vehículo {})", row.vehicle_id));
            *totals.entry(vehicle_name).or_insert(Decimal::ZERO) += row.amount;
        }

        let mut summary: Vec<SpendSummaryRow> = totals
            .into_iter()
            .map(|(vehicle_name, total_amount)| SpendSummaryRow {
                vehicle_name,
                total_amount,
            })
            .collect();
        summary.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then_with(|| a.vehicle_name.cmp(&b.vehicle_name))
        });
        Ok(summary)
    }
}
