use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_not_empty")]
    pub username: String,
    #[validate(custom = "validate_not_empty")]
    pub password: String,
}

// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub username: String,
    pub expires_in: u64,
}

// Estado de la sesión tal como lo ve el cliente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub state: SessionState,
    pub username: Option<String>,
    /// Vista que el cliente debe mostrar: `login` o `dashboard`
    pub view: String,
}

impl SessionStatusResponse {
    pub fn logged_in(username: String) -> Self {
        Self {
            state: SessionState::LoggedIn,
            username: Some(username),
            view: "dashboard".to_string(),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            state: SessionState::LoggedOut,
            username: None,
            view: "login".to_string(),
        }
    }
}
