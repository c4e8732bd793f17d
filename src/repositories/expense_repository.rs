use crate::dto::common_dto::DateRangeQuery;
use crate::models::expense::Expense;
use crate::models::report::{DailyExpense, MonthlyTotal, VehicleExpenseSummary};
use crate::models::vehicle::VehicleExpenseTotals;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

/// Campos de un gasto nuevo, ya validados
#[derive(Debug)]
pub struct NewExpense {
    pub vehicle_number: String,
    pub date: NaiveDate,
    pub petrol: f64,
    pub toll: f64,
    pub maintenance: f64,
    pub tips: f64,
    pub note: Option<String>,
}

pub struct ExpenseRepository {
    pool: SqlitePool,
}

impl ExpenseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, expense: NewExpense) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (vehicle_number, date, petrol, toll, maintenance, tips, note, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING *
            "#,
        )
        .bind(expense.vehicle_number)
        .bind(expense.date)
        .bind(expense.petrol)
        .bind(expense.toll)
        .bind(expense.maintenance)
        .bind(expense.tips)
        .bind(expense.note)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    /// Todas las filas, opcionalmente dentro de un rango inclusivo
    pub async fn list(&self, range: DateRangeQuery) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM expenses
            WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date <= ?2)
            ORDER BY date, id
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Gasto total (cuatro categorías) por mes `YYYY-MM`
    pub async fn monthly_totals(&self) -> Result<Vec<MonthlyTotal>, AppError> {
        let totals = sqlx::query_as::<_, MonthlyTotal>(
            r#"
            SELECT substr(date, 1, 7) AS month,
                   COALESCE(SUM(petrol + toll + maintenance + tips), 0.0) AS amount
            FROM expenses
            GROUP BY substr(date, 1, 7)
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    /// Suma por categoría y vehículo en el rango, mayor total primero
    pub async fn totals_by_vehicle(&self, range: DateRangeQuery) -> Result<Vec<VehicleExpenseSummary>, AppError> {
        let totals = sqlx::query_as::<_, VehicleExpenseSummary>(
            r#"
            SELECT vehicle_number,
                   COALESCE(SUM(petrol), 0.0) AS petrol,
                   COALESCE(SUM(toll), 0.0) AS toll,
                   COALESCE(SUM(maintenance), 0.0) AS maintenance,
                   COALESCE(SUM(tips), 0.0) AS tips,
                   COALESCE(SUM(petrol + toll + maintenance + tips), 0.0) AS total
            FROM expenses
            WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date <= ?2)
            GROUP BY vehicle_number
            ORDER BY total DESC, vehicle_number
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    pub async fn daily_totals(&self) -> Result<Vec<DailyExpense>, AppError> {
        let totals = sqlx::query_as::<_, DailyExpense>(
            r#"
            SELECT date, COALESCE(SUM(petrol + toll + maintenance + tips), 0.0) AS total
            FROM expenses
            GROUP BY date
            ORDER BY date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    /// Totales de un vehículo sobre todas sus filas de gasto
    pub async fn totals_for_vehicle(&self, vehicle_number: &str) -> Result<VehicleExpenseTotals, AppError> {
        let totals = sqlx::query_as::<_, VehicleExpenseTotals>(
            r#"
            SELECT ?1 AS vehicle_number,
                   COALESCE(SUM(petrol), 0.0) AS petrol,
                   COALESCE(SUM(toll), 0.0) AS toll,
                   COALESCE(SUM(maintenance), 0.0) AS maintenance,
                   COALESCE(SUM(tips), 0.0) AS tips,
                   COALESCE(SUM(petrol + toll + maintenance + tips), 0.0) AS total,
                   COUNT(id) AS entries
            FROM expenses
            WHERE vehicle_number = ?1
            "#,
        )
        .bind(vehicle_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    pub async fn grand_total(&self) -> Result<f64, AppError> {
        let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(petrol + toll + maintenance + tips), 0.0) FROM expenses")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
