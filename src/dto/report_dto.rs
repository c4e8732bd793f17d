use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::report::{BarChart, DailyExpense, InsuranceAlert, MonthlyProfitLoss, VehicleExpenseSummary};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfitLossReport {
    pub months: Vec<MonthlyProfitLoss>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub chart: BarChart,
    /// Aviso informativo cuando no hay datos que mostrar
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleExpenseReport {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub vehicles: Vec<VehicleExpenseSummary>,
    pub grand_total: f64,
    pub chart: BarChart,
    /// Aviso informativo cuando no hay datos que mostrar
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyExpenseReport {
    pub days: Vec<DailyExpense>,
    pub chart: BarChart,
    /// Aviso informativo cuando no hay datos que mostrar
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InsuranceAlertQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsuranceAlertReport {
    pub threshold_days: i64,
    pub cutoff: NaiveDate,
    pub alerts: Vec<InsuranceAlert>,
    /// Aviso informativo cuando no hay datos que mostrar
    pub message: Option<String>,
}
