use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::controllers::income_controller::IncomeController;
use crate::dto::common_dto::{ApiResponse, DateRangeQuery};
use crate::dto::income_dto::CreateIncomeRequest;
use crate::models::income::Income;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppQuery};

pub fn create_income_router() -> Router<AppState> {
    Router::new().route("/", get(list_income).post(create_income))
}

async fn create_income(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateIncomeRequest>,
) -> Result<Json<ApiResponse<Income>>, AppError> {
    let controller = IncomeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_income(
    State(state): State<AppState>,
    AppQuery(range): AppQuery<DateRangeQuery>,
) -> Result<Json<ApiResponse<Vec<Income>>>, AppError> {
    let controller = IncomeController::new(state.pool.clone());
    let response = controller.list(range).await?;
    Ok(Json(response))
}
