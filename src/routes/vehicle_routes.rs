use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common_dto::{ApiResponse, UpdateResult};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateInsuranceRequest, VehicleNumbersResponse};
use crate::models::vehicle::{Vehicle, VehicleExpenseTotals};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppPath};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/numbers", get(vehicle_numbers))
        .route("/:vehicle_number/insurance", put(update_insurance))
        .route("/:vehicle_number/expense-totals", get(expense_totals))
}

async fn create_vehicle(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Vehicle>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn vehicle_numbers(State(state): State<AppState>) -> Result<Json<VehicleNumbersResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.numbers().await?;
    Ok(Json(response))
}

async fn update_insurance(
    State(state): State<AppState>,
    AppPath(vehicle_number): AppPath<String>,
    AppJson(request): AppJson<UpdateInsuranceRequest>,
) -> Result<Json<ApiResponse<UpdateResult>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_insurance(&vehicle_number, request).await?;
    Ok(Json(response))
}

async fn expense_totals(
    State(state): State<AppState>,
    AppPath(vehicle_number): AppPath<String>,
) -> Result<Json<ApiResponse<VehicleExpenseTotals>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.expense_totals(&vehicle_number).await?;
    Ok(Json(response))
}
