use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::controllers::report_controller::ReportController;
use crate::dto::common_dto::DateRangeQuery;
use crate::dto::report_dto::{
    DailyExpenseReport, InsuranceAlertQuery, InsuranceAlertReport, ProfitLossReport, VehicleExpenseReport,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppQuery;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/profit-loss", get(profit_loss))
        .route("/vehicle-expenses", get(vehicle_expenses))
        .route("/daily-expenses", get(daily_expenses))
}

pub fn create_insurance_router() -> Router<AppState> {
    Router::new().route("/alerts", get(insurance_alerts))
}

async fn profit_loss(State(state): State<AppState>) -> Result<Json<ProfitLossReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.profit_loss().await?))
}

async fn vehicle_expenses(
    State(state): State<AppState>,
    AppQuery(range): AppQuery<DateRangeQuery>,
) -> Result<Json<VehicleExpenseReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.vehicle_expenses(range).await?))
}

async fn daily_expenses(State(state): State<AppState>) -> Result<Json<DailyExpenseReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.daily_expenses().await?))
}

async fn insurance_alerts(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<InsuranceAlertQuery>,
) -> Result<Json<InsuranceAlertReport>, AppError> {
    let days = query.days.unwrap_or(state.config.insurance_alert_days);
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.insurance_alerts(Utc::now().date_naive(), days).await?))
}
