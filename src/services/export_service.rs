//! Exportación CSV
//!
//! Serializa la tabla completa (sin filtros ni paginación) a CSV UTF-8
//! con fila de cabecera.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Tablas exportables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTable {
    Drivers,
    Expenses,
    Income,
}

impl ExportTable {
    pub const ALL: [ExportTable; 3] = [ExportTable::Drivers, ExportTable::Expenses, ExportTable::Income];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTable::Drivers => "drivers",
            ExportTable::Expenses => "expenses",
            ExportTable::Income => "income",
        }
    }

    /// Nombre del fichero descargado
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for ExportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportTable {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.strip_suffix(".csv").unwrap_or(value);
        ExportTable::ALL
            .into_iter()
            .find(|table| table.as_str() == name)
            .ok_or_else(|| not_found_error("Export table", value))
    }
}

/// Serializar filas a CSV. Con cero filas se escribe sólo la cabecera.
pub fn to_csv<T: Serialize>(rows: &[T], header: &[&str]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if rows.is_empty() {
        writer
            .write_record(header)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    for row in rows {
        writer.serialize(row).map_err(|e| AppError::Export(e.to_string()))?;
    }

    writer.into_inner().map_err(|e| AppError::Export(e.to_string()))
}
