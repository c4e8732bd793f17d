use crate::models::driver::Driver;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

/// Campos de un conductor nuevo, ya validados
#[derive(Debug)]
pub struct NewDriver {
    pub name: String,
    pub license_number: String,
    pub contact: Option<String>,
    pub backup_contact: Option<String>,
    pub assigned_vehicle: Option<String>,
}

pub struct DriverRepository {
    pool: SqlitePool,
}

impl DriverRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, driver: NewDriver) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (name, license_number, contact, backup_contact, assigned_vehicle, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING *
            "#,
        )
        .bind(driver.name)
        .bind(driver.license_number)
        .bind(driver.contact)
        .bind(driver.backup_contact)
        .bind(driver.assigned_vehicle)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(drivers)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
