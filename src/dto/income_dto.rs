use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// Request para registrar un ingreso
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIncomeRequest {
    pub date: NaiveDate,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    pub note: Option<String>,
}
