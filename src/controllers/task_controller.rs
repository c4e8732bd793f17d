use crate::dto::common_dto::{ApiResponse, UpdateResult};
use crate::dto::task_dto::{CreateTaskRequest, TaskListQuery, UpdateTaskStatusRequest};
use crate::models::task::Task;
use crate::repositories::task_repository::TaskRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use validator::Validate;

pub struct TaskController {
    repository: TaskRepository,
}

impl TaskController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: TaskRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTaskRequest) -> Result<ApiResponse<Task>, AppError> {
        request.validate()?;

        let task = self
            .repository
            .create(
                request.vehicle_number.trim().to_string(),
                request.description.trim().to_string(),
                request.due_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(task, "Task added".to_string()))
    }

    /// Por defecto sólo las pendientes; `all=true` devuelve todas
    pub async fn list(&self, query: TaskListQuery) -> Result<ApiResponse<Vec<Task>>, AppError> {
        let status = if query.all {
            None
        } else {
            Some(query.status.unwrap_or_default())
        };

        let tasks = self.repository.list(status).await?;
        Ok(ApiResponse::listing(tasks, "No pending tasks"))
    }

    pub async fn update_status(
        &self,
        id: i64,
        request: UpdateTaskStatusRequest,
    ) -> Result<ApiResponse<UpdateResult>, AppError> {
        let rows_affected = self.repository.update_status(id, request.status).await?;

        let message = if rows_affected == 0 {
            format!("No task with id {}", id)
        } else {
            "Task status updated".to_string()
        };

        Ok(ApiResponse::success_with_message(UpdateResult { rows_affected }, message))
    }
}
