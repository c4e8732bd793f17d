//! Modelo de Task (mantenimiento pendiente)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado de una tarea. No hay reglas de transición: se sobrescribe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Default)]
#[sqlx(rename_all = "PascalCase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Task {
    pub id: i64,
    pub vehicle_number: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}
