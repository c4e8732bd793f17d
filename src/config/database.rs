//! Configuración de base de datos
//!
//! Este módulo maneja la conexión al fichero SQLite local con SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Crear el pool; el fichero se crea si no existe
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .connect_with(options)
            .await
    }

    /// Pool en memoria para tests: una sola conexión que nunca se recicla,
    /// de lo contrario cada conexión vería una base de datos distinta
    pub async fn create_test_pool() -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
    }
}
