use crate::dto::common_dto::DateRangeQuery;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

const SELECT_RECORDS: &str = r#"
    SELECT a.id, a.driver_id, d.name AS driver_name, a.date, a.status, a.created_at
    FROM attendance a
    LEFT JOIN drivers d ON d.id = a.driver_id
"#;

pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registrar una marca. No hay unicidad por conductor y día.
    pub async fn create(
        &self,
        driver_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO attendance (driver_id, date, status, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(driver_id)
        .bind(date)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        let record = sqlx::query_as::<_, AttendanceRecord>(&format!("{SELECT_RECORDS} WHERE a.id = ?1"))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    /// Marcas unidas con el nombre del conductor, opcionalmente por rango
    pub async fn list(&self, range: DateRangeQuery) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(&format!(
            "{SELECT_RECORDS} WHERE (?1 IS NULL OR a.date >= ?1) AND (?2 IS NULL OR a.date <= ?2) ORDER BY a.date, a.id"
        ))
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
