//! Modelo de Attendance
//!
//! Una fila por marca; no hay unicidad por conductor y día.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado de asistencia - se guarda como texto `Present` / `Absent`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(rename_all = "PascalCase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Marca de asistencia unida con el nombre del conductor
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub driver_id: i64,
    /// `None` si el conductor referenciado no existe
    pub driver_name: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
}
