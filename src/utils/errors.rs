//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("Export error: {0}")]
    Export(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) | AppError::Hash(_) | AppError::Export(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_response = match self {
            AppError::Database(e) => {
                error!("❌ Error de base de datos: {}", e);
                ErrorResponse {
                    error: "Database Error".to_string(),
                    message: "An error occurred while accessing the database".to_string(),
                    details: Some(json!({ "sql_error": e.to_string() })),
                    code: Some("DB_ERROR".to_string()),
                }
            }

            AppError::Validation(e) => {
                warn!("⚠️ Formulario rechazado: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The submitted form is incomplete or invalid".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::Unauthorized(msg) => {
                warn!("🔒 Acceso no autorizado: {}", msg);
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: Some("UNAUTHORIZED".to_string()),
                }
            }

            AppError::NotFound(msg) => ErrorResponse {
                error: "Not Found".to_string(),
                message: msg,
                details: None,
                code: Some("NOT_FOUND".to_string()),
            },

            AppError::Conflict(msg) => {
                warn!("⚠️ Conflicto: {}", msg);
                ErrorResponse {
                    error: "Conflict".to_string(),
                    message: msg,
                    details: None,
                    code: Some("CONFLICT".to_string()),
                }
            }

            AppError::BadRequest(msg) => ErrorResponse {
                error: "Bad Request".to_string(),
                message: msg,
                details: None,
                code: Some("BAD_REQUEST".to_string()),
            },

            AppError::Internal(msg) => {
                error!("❌ Error interno: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "An unexpected error occurred".to_string(),
                    details: Some(json!({ "internal_error": msg })),
                    code: Some("INTERNAL_ERROR".to_string()),
                }
            }

            AppError::Jwt(msg) => {
                warn!("🔒 Token rechazado: {}", msg);
                ErrorResponse {
                    error: "JWT Error".to_string(),
                    message: msg,
                    details: None,
                    code: Some("JWT_ERROR".to_string()),
                }
            }

            AppError::Hash(msg) => {
                error!("❌ Error de hash: {}", msg);
                ErrorResponse {
                    error: "Hash Error".to_string(),
                    message: "An error occurred while processing credentials".to_string(),
                    details: Some(json!({ "hash_error": msg })),
                    code: Some("HASH_ERROR".to_string()),
                }
            }

            AppError::Export(msg) => {
                error!("❌ Error exportando CSV: {}", msg);
                ErrorResponse {
                    error: "Export Error".to_string(),
                    message: "The table could not be exported".to_string(),
                    details: Some(json!({ "export_error": msg })),
                    code: Some("EXPORT_ERROR".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación sobre un campo concreto
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
