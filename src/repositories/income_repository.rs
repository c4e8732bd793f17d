use crate::dto::common_dto::DateRangeQuery;
use crate::models::income::Income;
use crate::models::report::MonthlyTotal;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

pub struct IncomeRepository {
    pool: SqlitePool,
}

impl IncomeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, date: NaiveDate, amount: f64, note: Option<String>) -> Result<Income, AppError> {
        let income = sqlx::query_as::<_, Income>(
            r#"
            INSERT INTO income (date, amount, note, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(amount)
        .bind(note)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(income)
    }

    pub async fn list(&self, range: DateRangeQuery) -> Result<Vec<Income>, AppError> {
        let income = sqlx::query_as::<_, Income>(
            r#"
            SELECT * FROM income
            WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date <= ?2)
            ORDER BY date, id
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(income)
    }

    pub async fn monthly_totals(&self) -> Result<Vec<MonthlyTotal>, AppError> {
        let totals = sqlx::query_as::<_, MonthlyTotal>(
            r#"
            SELECT substr(date, 1, 7) AS month, COALESCE(SUM(amount), 0.0) AS amount
            FROM income
            GROUP BY substr(date, 1, 7)
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    pub async fn grand_total(&self) -> Result<f64, AppError> {
        let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0.0) FROM income")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
