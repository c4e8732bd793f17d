//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: el pool SQLite, la configuración y el
//! registro de sesiones abiertas del administrador.

use crate::config::environment::EnvironmentConfig;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Sesión abierta del administrador
#[derive(Clone, Debug)]
pub struct AdminSession {
    pub session_id: String,
    pub username: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl AdminSession {
    pub fn new(session_id: String, username: String, expires_at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            session_id,
            username,
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() > self.expires_at
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub sessions: Arc<RwLock<HashMap<String, AdminSession>>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Obtener una sesión activa; las expiradas no cuentan
    pub async fn get_session(&self, session_id: &str) -> Option<AdminSession> {
        let sessions = self.sessions.read().await;
        let result = sessions.get(session_id).filter(|s| !s.is_expired()).cloned();
        if result.is_none() {
            log::debug!("🔍 Sesión '{}' no encontrada o expirada", session_id);
        }
        result
    }

    /// Registrar una sesión nueva
    pub async fn store_session(&self, session: AdminSession) {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired());
        log::info!("💾 Sesión registrada para '{}' ({} activas)", session.username, sessions.len() + 1);
        sessions.insert(session.session_id.clone(), session);
    }

    /// Eliminar una sesión (logout)
    pub async fn remove_session(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(session_id).is_some() {
            log::info!("🗑️ Sesión '{}' eliminada", session_id);
        }
    }
}
