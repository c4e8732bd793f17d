use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insertar un vehículo. Devuelve `None` si el número ya existe
    /// (la fila existente no se toca).
    pub async fn create(
        &self,
        vehicle_number: String,
        model: Option<String>,
        insurance_expiry: Option<NaiveDate>,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (vehicle_number, model, insurance_expiry, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(vehicle_number) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(vehicle_number)
        .bind(model)
        .bind(insurance_expiry)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY vehicle_number")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn numbers(&self) -> Result<Vec<String>, AppError> {
        let numbers: Vec<String> = sqlx::query_scalar("SELECT vehicle_number FROM vehicles ORDER BY vehicle_number")
            .fetch_all(&self.pool)
            .await?;

        Ok(numbers)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Sobrescribir la fecha del seguro; la última escritura gana.
    /// Un número inexistente actualiza cero filas.
    pub async fn update_insurance_expiry(&self, vehicle_number: &str, expiry: NaiveDate) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE vehicles SET insurance_expiry = ?1 WHERE vehicle_number = ?2")
            .bind(expiry)
            .bind(vehicle_number)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Vehículos con seguro que vence en `cutoff` o antes (incluye vencidos)
    pub async fn insurance_expiring_by(&self, cutoff: NaiveDate) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE insurance_expiry IS NOT NULL AND insurance_expiry <= ?1
            ORDER BY insurance_expiry, vehicle_number
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
