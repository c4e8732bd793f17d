use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Request para registrar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_not_empty")]
    pub name: String,
    #[validate(custom = "validate_not_empty")]
    pub license_number: String,
    pub contact: Option<String>,
    pub backup_contact: Option<String>,
    pub assigned_vehicle: Option<String>,
}
