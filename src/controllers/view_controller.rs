//! Menú lateral y vistas del panel
//!
//! Cada entrada del menú se resuelve a un payload JSON con todo lo que la
//! vista necesita para pintarse (tablas, gráficos y opciones de formulario).

use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::controllers::dashboard_controller::DashboardController;
use crate::controllers::report_controller::ReportController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common_dto::DateRangeQuery;
use crate::dto::view_dto::{MenuEntry, ViewResponse};
use crate::models::task::TaskStatus;
use crate::repositories::attendance_repository::AttendanceRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::income_repository::IncomeRepository;
use crate::repositories::task_repository::TaskRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::export_service::ExportTable;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuView {
    Dashboard,
    Drivers,
    Vehicles,
    Expenses,
    Attendance,
    Income,
    Insurance,
    Tasks,
    Export,
}

impl MenuView {
    pub const ALL: [MenuView; 9] = [
        MenuView::Dashboard,
        MenuView::Drivers,
        MenuView::Vehicles,
        MenuView::Expenses,
        MenuView::Attendance,
        MenuView::Income,
        MenuView::Insurance,
        MenuView::Tasks,
        MenuView::Export,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            MenuView::Dashboard => "dashboard",
            MenuView::Drivers => "drivers",
            MenuView::Vehicles => "vehicles",
            MenuView::Expenses => "expenses",
            MenuView::Attendance => "attendance",
            MenuView::Income => "income",
            MenuView::Insurance => "insurance",
            MenuView::Tasks => "tasks",
            MenuView::Export => "export",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuView::Dashboard => "Dashboard",
            MenuView::Drivers => "Driver Management",
            MenuView::Vehicles => "Vehicle Management",
            MenuView::Expenses => "Expenses",
            MenuView::Attendance => "Attendance",
            MenuView::Income => "Income / Profit-Loss",
            MenuView::Insurance => "Insurance Alerts",
            MenuView::Tasks => "Pending Tasks",
            MenuView::Export => "Export",
        }
    }

    pub fn entry(&self) -> MenuEntry {
        MenuEntry {
            label: self.label().to_string(),
            slug: self.slug().to_string(),
            path: format!("/api/views/{}", self.slug()),
        }
    }
}

impl FromStr for MenuView {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MenuView::ALL
            .into_iter()
            .find(|view| view.slug() == value)
            .ok_or_else(|| not_found_error("View", value))
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(format!("Error serializing view: {}", e)))
}

pub struct ViewController {
    pool: SqlitePool,
}

impl ViewController {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        MenuView::ALL.iter().map(MenuView::entry).collect()
    }

    /// Construir el contenido de una vista del menú
    pub async fn render(&self, state: &AppState, username: &str, view: MenuView) -> Result<ViewResponse, AppError> {
        let pool = self.pool.clone();
        let today = Utc::now().date_naive();

        let content = match view {
            MenuView::Dashboard => {
                let summary = DashboardController::new(pool)
                    .summary(username, state.config.dashboard_insurance_days)
                    .await?;
                to_value(&summary)?
            }
            MenuView::Drivers => {
                let drivers = DriverRepository::new(pool.clone()).list().await?;
                let vehicle_numbers = VehicleController::new(pool).numbers().await?;
                json!({
                    "drivers": to_value(&drivers)?,
                    "vehicle_options": to_value(&vehicle_numbers)?,
                })
            }
            MenuView::Vehicles => {
                let vehicles = VehicleRepository::new(pool).list().await?;
                json!({ "vehicles": to_value(&vehicles)? })
            }
            MenuView::Expenses => {
                let expenses = ExpenseRepository::new(pool.clone())
                    .list(DateRangeQuery::default())
                    .await?;
                let reports = ReportController::new(pool.clone());
                let daily = reports.daily_expenses().await?;
                let per_vehicle = reports.vehicle_expenses(DateRangeQuery::default()).await?;
                let vehicle_numbers = VehicleController::new(pool).numbers().await?;
                json!({
                    "expenses": to_value(&expenses)?,
                    "daily": to_value(&daily)?,
                    "per_vehicle": to_value(&per_vehicle)?,
                    "vehicle_options": to_value(&vehicle_numbers)?,
                })
            }
            MenuView::Attendance => {
                let records = AttendanceRepository::new(pool.clone())
                    .list(DateRangeQuery::default())
                    .await?;
                let drivers = DriverRepository::new(pool).list().await?;
                json!({
                    "attendance": to_value(&records)?,
                    "drivers": to_value(&drivers)?,
                })
            }
            MenuView::Income => {
                let income = IncomeRepository::new(pool.clone())
                    .list(DateRangeQuery::default())
                    .await?;
                let profit_loss = ReportController::new(pool).profit_loss().await?;
                json!({
                    "income": to_value(&income)?,
                    "profit_loss": to_value(&profit_loss)?,
                })
            }
            MenuView::Insurance => {
                let report = ReportController::new(pool)
                    .insurance_alerts(today, state.config.insurance_alert_days)
                    .await?;
                to_value(&report)?
            }
            MenuView::Tasks => {
                let tasks = TaskRepository::new(pool.clone())
                    .list(Some(TaskStatus::Pending))
                    .await?;
                let vehicle_numbers = VehicleController::new(pool).numbers().await?;
                json!({
                    "tasks": to_value(&tasks)?,
                    "vehicle_options": to_value(&vehicle_numbers)?,
                })
            }
            MenuView::Export => {
                let tables: Vec<Value> = ExportTable::ALL
                    .iter()
                    .map(|table| {
                        json!({
                            "table": table.as_str(),
                            "file_name": table.file_name(),
                            "path": format!("/api/export/{}", table.as_str()),
                        })
                    })
                    .collect();
                json!({ "tables": tables })
            }
        };

        Ok(ViewResponse {
            view: view.slug().to_string(),
            title: view.label().to_string(),
            content,
        })
    }
}
