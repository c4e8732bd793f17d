//! Utilidades JWT
//!
//! Los tokens de sesión del administrador son JWT firmados (HS256) que
//! llevan el id de sesión en `sid`. La firma sola no basta: el middleware
//! también exige que la sesión siga registrada en `AppState`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del token de sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // username del admin
    pub sid: String, // id de sesión
    pub exp: usize,
    pub iat: usize,
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Instante de expiración `now + seconds`; fuera de rango es un error
pub fn session_expiry(now: DateTime<Utc>, seconds: u64) -> Result<DateTime<Utc>, AppError> {
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| AppError::Internal(format!("Session expiration out of range: {}s", seconds)))
}

/// Generar token para una sesión recién abierta
pub fn generate_token(username: &str, session_id: &str, config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = session_expiry(now, config.expiration)?;

    let claims = SessionClaims {
        sub: username.to_string(),
        sid: session_id.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar un token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<SessionClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization header must start with 'Bearer '".to_string()))?;

    if token.trim().is_empty() {
        return Err(AppError::Unauthorized("Empty session token".to_string()));
    }

    Ok(token.trim())
}
