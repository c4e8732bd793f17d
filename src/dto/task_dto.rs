use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::task::TaskStatus;
use crate::utils::validation::validate_not_empty;

// Request para crear una tarea de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_number: String,
    #[validate(custom = "validate_not_empty")]
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

// Request para sobrescribir el estado de una tarea
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

// Filtro de listado: por defecto sólo las pendientes
#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub all: bool,
}
