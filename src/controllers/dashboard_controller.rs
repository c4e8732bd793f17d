use crate::controllers::report_controller::ReportController;
use crate::dto::dashboard_dto::DashboardSummary;
use crate::models::task::TaskStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::income_repository::IncomeRepository;
use crate::repositories::task_repository::TaskRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct DashboardController {
    drivers: DriverRepository,
    vehicles: VehicleRepository,
    expenses: ExpenseRepository,
    income: IncomeRepository,
    tasks: TaskRepository,
    reports: ReportController,
}

impl DashboardController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool.clone()),
            income: IncomeRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool.clone()),
            reports: ReportController::new(pool),
        }
    }

    /// Bienvenida, contadores y alertas de seguro a `insurance_days` días
    pub async fn summary(&self, username: &str, insurance_days: i64) -> Result<DashboardSummary, AppError> {
        let now = Utc::now();

        let total_expenses = self.expenses.grand_total().await?;
        let total_income = self.income.grand_total().await?;
        let insurance = self
            .reports
            .insurance_alerts(now.date_naive(), insurance_days)
            .await?;

        Ok(DashboardSummary {
            welcome: format!("Welcome, {}", username),
            generated_at: now,
            total_drivers: self.drivers.count().await?,
            total_vehicles: self.vehicles.count().await?,
            pending_tasks: self.tasks.count_by_status(TaskStatus::Pending).await?,
            total_expenses,
            total_income,
            profit: total_income - total_expenses,
            insurance,
        })
    }
}
