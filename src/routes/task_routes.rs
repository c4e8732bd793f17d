use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::task_controller::TaskController;
use crate::dto::common_dto::{ApiResponse, UpdateResult};
use crate::dto::task_dto::{CreateTaskRequest, TaskListQuery, UpdateTaskStatusRequest};
use crate::models::task::Task;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{AppJson, AppPath, AppQuery};

pub fn create_task_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id/status", put(update_task_status))
}

async fn create_task(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateTaskRequest>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    let controller = TaskController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_tasks(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TaskListQuery>,
) -> Result<Json<ApiResponse<Vec<Task>>>, AppError> {
    let controller = TaskController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn update_task_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<UpdateTaskStatusRequest>,
) -> Result<Json<ApiResponse<UpdateResult>>, AppError> {
    let controller = TaskController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}
