use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Request para registrar un gasto; las categorías omitidas valen 0
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_number: String,
    pub date: NaiveDate,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub petrol: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub toll: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub maintenance: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub tips: f64,
    pub note: Option<String>,
}
