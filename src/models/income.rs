//! Modelo de Income, independiente de vehículos y conductores

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Income {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
