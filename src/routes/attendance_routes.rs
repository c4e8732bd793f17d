use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::controllers::attendance_controller::AttendanceController;
use crate::dto::attendance_dto::MarkAttendanceRequest;
use crate::dto::common_dto::{ApiResponse, DateRangeQuery};
use crate::models::attendance::AttendanceRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppQuery};

pub fn create_attendance_router() -> Router<AppState> {
    Router::new().route("/", get(list_attendance).post(mark_attendance))
}

async fn mark_attendance(
    State(state): State<AppState>,
    AppJson(request): AppJson<MarkAttendanceRequest>,
) -> Result<Json<ApiResponse<AttendanceRecord>>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.mark(request).await?;
    Ok(Json(response))
}

async fn list_attendance(
    State(state): State<AppState>,
    AppQuery(range): AppQuery<DateRangeQuery>,
) -> Result<Json<ApiResponse<Vec<AttendanceRecord>>>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.list(range).await?;
    Ok(Json(response))
}
