//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto; un valor presente pero mal formado es un
//! error de arranque.

use anyhow::{ensure, Context, Result};
use std::env;
use std::str::FromStr;

/// Duración máxima de una sesión: 30 días
pub const MAX_JWT_EXPIRATION: u64 = 30 * 24 * 3600;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub admin_username: String,
    pub admin_password: String,
    pub bcrypt_cost: u32,
    pub cors_origins: Vec<String>,
    /// Umbral de alertas de seguro mostrado en el dashboard
    pub dashboard_insurance_days: i64,
    /// Umbral por defecto de la vista de alertas de seguro
    pub insurance_alert_days: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            database_url: "sqlite://transport.db".to_string(),
            jwt_secret: "change-me-transport-admin-secret".to_string(),
            jwt_expiration: 8 * 3600,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cors_origins: Vec::new(),
            dashboard_insurance_days: 10,
            insurance_alert_days: 30,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar configuración desde variables de entorno sobre los valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_expiration: parse_var("JWT_EXPIRATION", defaults.jwt_expiration)?,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or(defaults.cors_origins),
            dashboard_insurance_days: parse_var(
                "DASHBOARD_INSURANCE_DAYS",
                defaults.dashboard_insurance_days,
            )?,
            insurance_alert_days: parse_var("INSURANCE_ALERT_DAYS", defaults.insurance_alert_days)?,
        }
        .validated()
    }

    /// Rechazar valores que parsean pero no tienen sentido
    pub fn validated(self) -> Result<Self> {
        ensure!(
            (1..=MAX_JWT_EXPIRATION).contains(&self.jwt_expiration),
            "JWT_EXPIRATION must be between 1 and {} seconds, got {}",
            MAX_JWT_EXPIRATION,
            self.jwt_expiration
        );
        ensure!(
            self.dashboard_insurance_days >= 0 && self.insurance_alert_days >= 0,
            "insurance alert thresholds must be zero or positive"
        );
        Ok(self)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
