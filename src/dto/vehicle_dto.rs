use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_number: String,
    pub model: Option<String>,
    pub insurance_expiry: Option<NaiveDate>,
}

// Request para actualizar la fecha de vencimiento del seguro
#[derive(Debug, Deserialize)]
pub struct UpdateInsuranceRequest {
    pub insurance_expiry: NaiveDate,
}

// Números de vehículo para los selectores de los formularios
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleNumbersResponse {
    pub vehicle_numbers: Vec<String>,
    /// `true` si todavía no hay vehículos y la lista es de relleno
    pub placeholder: bool,
}
