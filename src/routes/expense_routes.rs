use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::common_dto::{ApiResponse, DateRangeQuery};
use crate::dto::expense_dto::CreateExpenseRequest;
use crate::models::expense::Expense;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppQuery};

pub fn create_expense_router() -> Router<AppState> {
    Router::new().route("/", get(list_expenses).post(create_expense))
}

async fn create_expense(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_expenses(
    State(state): State<AppState>,
    AppQuery(range): AppQuery<DateRangeQuery>,
) -> Result<Json<ApiResponse<Vec<Expense>>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.list(range).await?;
    Ok(Json(response))
}
