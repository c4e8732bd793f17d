//! Utilidades de validación
//!
//! Funciones helper usadas por los `#[validate(custom = ...)]` de los DTOs
//! y por los controladores para los filtros de fecha.

use chrono::NaiveDate;
use validator::ValidationError;

use crate::utils::errors::{bad_request_error, AppResult};

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        error.message = Some("This field is required".into());
        return Err(error);
    }
    Ok(())
}

/// Verificar un rango de fechas inclusivo: `start <= end` cuando ambos existen
pub fn validate_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(bad_request_error("start date must not be after end date"));
        }
    }
    Ok(())
}

/// Recortar un campo opcional; un string en blanco se trata como ausente
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
