use std::sync::Arc;

use crate::dto::report_dto::HistoryQuery;
use crate::services::report_service::{DetailedHistoryRow, ServiceHistoryRow, SpendSummaryRow};
use crate::services::ReportService;
use crate::utils::errors::AppError;

pub struct ReportController {
    reports: Arc<ReportService>,
}

impl ReportController {
    pub fn new(reports: Arc<ReportService>) -> Self {
        Self { reports }
    }

    pub async fn service_history(
        &self,
        query: HistoryQuery,
    ) -> Result<Vec<ServiceHistoryRow>, AppError> {
        let range = match (query.date_start, query.date_end) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(AppError::BadRequest(
                        "date_start no puede ser posterior a date_end".to_string(),
                    ));
                }
                Some((start, end))
            }
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "El filtro de fechas requiere date_start y date_end juntos".to_string(),
                ))
            }
        };

        self.reports.service_history(range).await
    }

    pub async fn detailed_history(&self) -> Result<Vec<DetailedHistoryRow>, AppError> {
        self.reports.detailed_history().await
    }

    pub async fn spend_summary(&self) -> Result<Vec<SpendSummaryRow>, AppError> {
        self.reports.spend_summary().await
    }
}
