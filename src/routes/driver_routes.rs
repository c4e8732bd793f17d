use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::driver_controller::DriverController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::driver_dto::CreateDriverRequest;
use crate::models::driver::Driver;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_driver_router() -> Router<AppState> {
    Router::new().route("/", get(list_drivers).post(create_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateDriverRequest>,
) -> Result<Json<ApiResponse<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_drivers(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Driver>>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
