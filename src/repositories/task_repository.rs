use crate::models::task::{Task, TaskStatus};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_number: String,
        description: String,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (vehicle_number, description, due_date, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING *
            "#,
        )
        .bind(vehicle_number)
        .bind(description)
        .bind(due_date)
        .bind(TaskStatus::Pending)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Listar tareas; `None` devuelve todas
    pub async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE (?1 IS NULL OR status = ?1)
            ORDER BY due_date IS NULL, due_date, id
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Sobrescribir el estado; un id inexistente actualiza cero filas
    pub async fn update_status(&self, id: i64, status: TaskStatus) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE tasks SET status = ?1 WHERE id = ?2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_by_status(&self, status: TaskStatus) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE status = ?1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
