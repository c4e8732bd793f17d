use crate::dto::common_dto::DateRangeQuery;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::income_repository::IncomeRepository;
use crate::services::export_service::{to_csv, ExportTable};
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;

const DRIVER_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "license_number",
    "contact",
    "backup_contact",
    "assigned_vehicle",
    "created_at",
];
const EXPENSE_COLUMNS: [&str; 9] = [
    "id",
    "vehicle_number",
    "date",
    "petrol",
    "toll",
    "maintenance",
    "tips",
    "note",
    "created_at",
];
const INCOME_COLUMNS: [&str; 5] = ["id", "date", "amount", "note", "created_at"];

/// Fichero CSV listo para descargar
#[derive(Debug)]
pub struct CsvExport {
    pub file_name: String,
    pub content: Vec<u8>,
}

pub struct ExportController {
    pool: SqlitePool,
}

impl ExportController {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Tabla completa, sin filtros
    pub async fn export(&self, table: ExportTable) -> Result<CsvExport, AppError> {
        let content = match table {
            ExportTable::Drivers => {
                let rows = DriverRepository::new(self.pool.clone()).list().await?;
                to_csv(&rows, &DRIVER_COLUMNS)?
            }
            ExportTable::Expenses => {
                let rows = ExpenseRepository::new(self.pool.clone())
                    .list(DateRangeQuery::default())
                    .await?;
                to_csv(&rows, &EXPENSE_COLUMNS)?
            }
            ExportTable::Income => {
                let rows = IncomeRepository::new(self.pool.clone())
                    .list(DateRangeQuery::default())
                    .await?;
                to_csv(&rows, &INCOME_COLUMNS)?
            }
        };

        info!("📤 Exportación '{}' generada ({} bytes)", table, content.len());

        Ok(CsvExport {
            file_name: table.file_name(),
            content,
        })
    }
}
