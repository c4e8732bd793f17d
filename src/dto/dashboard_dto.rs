use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::report_dto::InsuranceAlertReport;

// Resumen del dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub welcome: String,
    pub generated_at: DateTime<Utc>,
    pub total_drivers: i64,
    pub total_vehicles: i64,
    pub pending_tasks: i64,
    pub total_expenses: f64,
    pub total_income: f64,
    pub profit: f64,
    pub insurance: InsuranceAlertReport,
}
