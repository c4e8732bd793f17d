//! Servicio de autenticación del administrador
//!
//! Verificación de credenciales con bcrypt contra la única fila de
//! `admins`, apertura y cierre de sesiones.

use bcrypt::{hash, verify};
use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::repositories::admin_repository::AdminRepository;
use crate::state::{AdminSession, AppState};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, session_expiry, verify_token, JwtConfig};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Hashear una contraseña con el coste configurado
pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    hash(password, cost).map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
}

/// Sesión recién abierta
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub username: String,
    pub expires_in: u64,
}

pub struct AuthService {
    repository: AdminRepository,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(pool: SqlitePool, jwt: JwtConfig) -> Self {
        Self {
            repository: AdminRepository::new(pool),
            jwt,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.pool.clone(), JwtConfig::from(&state.config))
    }

    /// Comprobar usuario y contraseña. Reintentos ilimitados, sin bloqueo.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<bool> {
        let Some(admin) = self.repository.find_by_username(username).await? else {
            return Ok(false);
        };

        verify(password, &admin.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))
    }

    /// LoggedOut -> LoggedIn: registra una sesión nueva y firma su token
    pub async fn login(&self, state: &AppState, username: &str, password: &str) -> AppResult<IssuedSession> {
        if !self.verify_credentials(username, password).await? {
            warn!("🔒 Login fallido para '{}'", username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let session_id = Uuid::new_v4().to_string();
        let expires_at = session_expiry(chrono::Utc::now(), self.jwt.expiration)?;
        let token = generate_token(username, &session_id, &self.jwt)?;

        state
            .store_session(AdminSession::new(session_id, username.to_string(), expires_at))
            .await;

        info!("✅ Sesión abierta para '{}'", username);
        Ok(IssuedSession {
            token,
            username: username.to_string(),
            expires_in: self.jwt.expiration,
        })
    }

    /// Resolver un token a su sesión activa
    pub async fn authenticate(&self, state: &AppState, token: &str) -> AppResult<AdminSession> {
        let claims = verify_token(token, &self.jwt)?;

        match state.get_session(&claims.sid).await {
            Some(session) if session.username == claims.sub => Ok(session),
            _ => Err(AppError::Unauthorized("Session expired or logged out".to_string())),
        }
    }

    /// LoggedIn -> LoggedOut, incondicional
    pub async fn logout(&self, state: &AppState, session_id: &str) {
        state.remove_session(session_id).await;
        info!("👋 Sesión cerrada");
    }
}
