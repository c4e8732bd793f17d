use crate::dto::common_dto::DateRangeQuery;
use crate::dto::report_dto::{DailyExpenseReport, InsuranceAlertReport, ProfitLossReport, VehicleExpenseReport};
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::income_repository::IncomeRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::report_service;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date_range;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct ReportController {
    expenses: ExpenseRepository,
    income: IncomeRepository,
    vehicles: VehicleRepository,
}

impl ReportController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            expenses: ExpenseRepository::new(pool.clone()),
            income: IncomeRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Ingresos, gastos y beneficio por mes
    pub async fn profit_loss(&self) -> Result<ProfitLossReport, AppError> {
        let expenses = self.expenses.monthly_totals().await?;
        let income = self.income.monthly_totals().await?;

        let months = report_service::merge_monthly(&expenses, &income);
        let total_income: f64 = months.iter().map(|m| m.income).sum();
        let total_expenses: f64 = months.iter().map(|m| m.expenses).sum();
        let chart = report_service::profit_loss_chart(&months);

        let message = months
            .is_empty()
            .then(|| "No income or expense data available".to_string());

        Ok(ProfitLossReport {
            months,
            total_income,
            total_expenses,
            total_profit: total_income - total_expenses,
            chart,
            message,
        })
    }

    /// Gasto por vehículo en un rango de fechas, ambos extremos incluidos
    pub async fn vehicle_expenses(&self, range: DateRangeQuery) -> Result<VehicleExpenseReport, AppError> {
        validate_date_range(range.start, range.end)?;

        let vehicles = self.expenses.totals_by_vehicle(range).await?;
        let grand_total: f64 = vehicles.iter().map(|v| v.total).sum();
        let chart = report_service::vehicle_expense_chart(&vehicles);
        let message = vehicles
            .is_empty()
            .then(|| "No expense data available for the selected range".to_string());

        Ok(VehicleExpenseReport {
            start: range.start,
            end: range.end,
            vehicles,
            grand_total,
            chart,
            message,
        })
    }

    pub async fn daily_expenses(&self) -> Result<DailyExpenseReport, AppError> {
        let days = self.expenses.daily_totals().await?;
        let chart = report_service::daily_expense_chart(&days);
        let message = days.is_empty().then(|| "No expense data available".to_string());
        Ok(DailyExpenseReport { days, chart, message })
    }

    /// Vehículos cuyo seguro vence en `days` días o antes (vencidos incluidos)
    pub async fn insurance_alerts(&self, today: NaiveDate, days: i64) -> Result<InsuranceAlertReport, AppError> {
        let cutoff = report_service::insurance_cutoff(today, days)?;
        let vehicles = self.vehicles.insurance_expiring_by(cutoff).await?;

        let alerts = report_service::insurance_alerts(vehicles, today, cutoff);
        let message = alerts
            .is_empty()
            .then(|| format!("No insurance expiring within {} days", days));

        Ok(InsuranceAlertReport {
            threshold_days: days,
            cutoff,
            alerts,
            message,
        })
    }
}
