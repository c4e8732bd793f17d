use crate::dto::common_dto::{ApiResponse, UpdateResult};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateInsuranceRequest, VehicleNumbersResponse};
use crate::models::vehicle::{Vehicle, VehicleExpenseTotals};
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::report_service::placeholder_vehicle_numbers;
use crate::utils::errors::{conflict_error, validation_error, AppError};
use crate::utils::validation::normalize_optional;
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    expenses: ExpenseRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool),
        }
    }

    /// Alta de vehículo. Un número repetido no crea fila: 409 y la tabla
    /// queda igual.
    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let vehicle_number = request.vehicle_number.trim().to_string();

        let vehicle = self
            .repository
            .create(
                vehicle_number.clone(),
                normalize_optional(request.model),
                request.insurance_expiry,
            )
            .await?
            .ok_or_else(|| conflict_error("Vehicle", "number", &vehicle_number))?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle added successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Vehicle>>, AppError> {
        let vehicles = self.repository.list().await?;
        Ok(ApiResponse::listing(vehicles, "No vehicles registered yet"))
    }

    /// Números para los selectores de formulario; relleno si no hay ninguno
    pub async fn numbers(&self) -> Result<VehicleNumbersResponse, AppError> {
        let numbers = self.repository.numbers().await?;

        if numbers.is_empty() {
            return Ok(VehicleNumbersResponse {
                vehicle_numbers: placeholder_vehicle_numbers(),
                placeholder: true,
            });
        }

        Ok(VehicleNumbersResponse {
            vehicle_numbers: numbers,
            placeholder: false,
        })
    }

    /// Sobrescribe el vencimiento del seguro. Un número desconocido no es
    /// un error: se informa `rows_affected = 0`.
    pub async fn update_insurance(
        &self,
        vehicle_number: &str,
        request: UpdateInsuranceRequest,
    ) -> Result<ApiResponse<UpdateResult>, AppError> {
        let vehicle_number = vehicle_number.trim();
        if vehicle_number.is_empty() {
            return Err(validation_error("vehicle_number", "Vehicle number is required"));
        }

        let rows_affected = self
            .repository
            .update_insurance_expiry(vehicle_number, request.insurance_expiry)
            .await?;

        info!(
            "📅 Seguro de '{}' actualizado a {} ({} filas)",
            vehicle_number, request.insurance_expiry, rows_affected
        );

        let message = if rows_affected == 0 {
            format!("No vehicle with number '{}'", vehicle_number)
        } else {
            "Insurance expiry updated".to_string()
        };

        Ok(ApiResponse::success_with_message(UpdateResult { rows_affected }, message))
    }

    /// Totales derivados de las filas de gasto del vehículo
    pub async fn expense_totals(&self, vehicle_number: &str) -> Result<ApiResponse<VehicleExpenseTotals>, AppError> {
        let totals = self.expenses.totals_for_vehicle(vehicle_number.trim()).await?;

        if totals.entries == 0 {
            return Ok(ApiResponse::success_with_message(
                totals,
                "No expenses recorded for this vehicle".to_string(),
            ));
        }

        Ok(ApiResponse::success(totals))
    }
}
