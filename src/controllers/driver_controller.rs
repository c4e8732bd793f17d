use crate::dto::common_dto::ApiResponse;
use crate::dto::driver_dto::CreateDriverRequest;
use crate::models::driver::Driver;
use crate::repositories::driver_repository::{DriverRepository, NewDriver};
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_optional;
use sqlx::SqlitePool;
use validator::Validate;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<ApiResponse<Driver>, AppError> {
        // Nombre y licencia son obligatorios
        request.validate()?;

        let driver = self
            .repository
            .create(NewDriver {
                name: request.name.trim().to_string(),
                license_number: request.license_number.trim().to_string(),
                contact: normalize_optional(request.contact),
                backup_contact: normalize_optional(request.backup_contact),
                assigned_vehicle: normalize_optional(request.assigned_vehicle),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            driver,
            "Driver added successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Driver>>, AppError> {
        let drivers = self.repository.list().await?;
        Ok(ApiResponse::listing(drivers, "No drivers recorded yet"))
    }
}
