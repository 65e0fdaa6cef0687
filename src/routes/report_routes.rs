use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::ReportController;
use crate::dto::report_dto::HistoryQuery;
use crate::services::report_service::{DetailedHistoryRow, ServiceHistoryRow, SpendSummaryRow};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/service-history", get(service_history))
        .route("/detailed-history", get(detailed_history))
        .route("/spend-summary", get(spend_summary))
}

async fn service_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ServiceHistoryRow>>, AppError> {
    let controller = ReportController::new(state.reports.clone());
    Ok(Json(controller.service_history(query).await?))
}

async fn detailed_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<DetailedHistoryRow>>, AppError> {
    let controller = ReportController::new(state.reports.clone());
    Ok(Json(controller.detailed_history().await?))
}

async fn spend_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpendSummaryRow>>, AppError> {
    let controller = ReportController::new(state.reports.clone());
    Ok(Json(controller.spend_summary().await?))
}
