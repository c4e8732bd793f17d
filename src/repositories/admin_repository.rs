use crate::models::admin::Admin;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct AdminRepository {
    pool: SqlitePool,
}

impl AdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, username: &str, password_hash: &str) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (username, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(admin)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(admin)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
