//! Modelo del administrador único del panel

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Fila de la tabla `admins`. Sólo existe una.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
