//! Modelo de Driver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Conductor - mapea a la tabla drivers. El número de licencia no es único.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub license_number: String,
    pub contact: Option<String>,
    pub backup_contact: Option<String>,
    pub assigned_vehicle: Option<String>,
    pub created_at: DateTime<Utc>,
}
