//! Modelo de Vehicle
//!
//! Los totales de gasto ya no se guardan en el vehículo: se derivan de la
//! tabla `expenses` por agregación (ver `VehicleExpenseTotals`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo - mapea a la tabla vehicles (`vehicle_number` es UNIQUE)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub vehicle_number: String,
    pub model: Option<String>,
    pub insurance_expiry: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Totales de gasto de un vehículo calculados sobre sus filas de gasto
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct VehicleExpenseTotals {
    pub vehicle_number: String,
    pub petrol: f64,
    pub toll: f64,
    pub maintenance: f64,
    pub tips: f64,
    pub total: f64,
    pub entries: i64,
}
