//! Modelo de Expense
//!
//! Filas de gasto sólo-inserción. El vehículo se referencia por número
//! (texto), sin clave foránea.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub vehicle_number: String,
    pub date: NaiveDate,
    pub petrol: f64,
    pub toll: f64,
    pub maintenance: f64,
    pub tips: f64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
