use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Response genérica
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Listado de tabla; si está vacío se acompaña de un mensaje informativo
    /// que sustituye a la tabla en la vista
    pub fn listing(items: Vec<T>, empty_message: &str) -> Self {
        if items.is_empty() {
            Self::success_with_message(items, empty_message.to_string())
        } else {
            Self::success(items)
        }
    }
}

// Filtro de rango de fechas inclusivo, ambos extremos opcionales
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct DateRangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

// Resultado de un UPDATE: cero filas no es un error
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResult {
    pub rows_affected: u64,
}
