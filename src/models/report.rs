//! Modelos de reportes y gráficos
//!
//! Resultados de agregación (mensual, por vehículo, diario) y la forma
//! genérica de un gráfico de barras que consume el frontend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Suma de una serie para un mes `YYYY-MM`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MonthlyTotal {
    pub month: String,
    pub amount: f64,
}

/// Fila del reporte de pérdidas y ganancias
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyProfitLoss {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Gasto por categoría de un vehículo dentro de un rango de fechas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct VehicleExpenseSummary {
    pub vehicle_number: String,
    pub petrol: f64,
    pub toll: f64,
    pub maintenance: f64,
    pub tips: f64,
    pub total: f64,
}

/// Gasto total de un día
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct DailyExpense {
    pub date: NaiveDate,
    pub total: f64,
}

/// Vehículo cuyo seguro vence dentro del umbral
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsuranceAlert {
    pub vehicle_number: String,
    pub model: Option<String>,
    pub insurance_expiry: NaiveDate,
    /// Negativo si el seguro ya venció
    pub days_remaining: i64,
}

/// Una serie de un gráfico de barras, alineada con `BarChart::categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Gráfico de barras listo para pintar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub stacked: bool,
}
