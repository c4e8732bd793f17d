use crate::dto::attendance_dto::MarkAttendanceRequest;
use crate::dto::common_dto::{ApiResponse, DateRangeQuery};
use crate::models::attendance::AttendanceRecord;
use crate::repositories::attendance_repository::AttendanceRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date_range;
use sqlx::SqlitePool;

pub struct AttendanceController {
    repository: AttendanceRepository,
}

impl AttendanceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: AttendanceRepository::new(pool),
        }
    }

    /// Marcar asistencia. Marcar dos veces el mismo día crea dos filas.
    pub async fn mark(&self, request: MarkAttendanceRequest) -> Result<ApiResponse<AttendanceRecord>, AppError> {
        let record = self
            .repository
            .create(request.driver_id, request.date, request.status)
            .await?;

        Ok(ApiResponse::success_with_message(
            record,
            "Attendance marked".to_string(),
        ))
    }

    pub async fn list(&self, range: DateRangeQuery) -> Result<ApiResponse<Vec<AttendanceRecord>>, AppError> {
        validate_date_range(range.start, range.end)?;
        let records = self.repository.list(range).await?;
        Ok(ApiResponse::listing(records, "No attendance marked yet"))
    }
}
