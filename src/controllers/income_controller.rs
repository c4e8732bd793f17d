use crate::dto::common_dto::{ApiResponse, DateRangeQuery};
use crate::dto::income_dto::CreateIncomeRequest;
use crate::models::income::Income;
use crate::repositories::income_repository::IncomeRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_optional, validate_date_range};
use sqlx::SqlitePool;
use validator::Validate;

pub struct IncomeController {
    repository: IncomeRepository,
}

impl IncomeController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: IncomeRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateIncomeRequest) -> Result<ApiResponse<Income>, AppError> {
        request.validate()?;

        let income = self
            .repository
            .create(request.date, request.amount, normalize_optional(request.note))
            .await?;

        Ok(ApiResponse::success_with_message(
            income,
            "Income added successfully".to_string(),
        ))
    }

    pub async fn list(&self, range: DateRangeQuery) -> Result<ApiResponse<Vec<Income>>, AppError> {
        validate_date_range(range.start, range.end)?;
        let income = self.repository.list(range).await?;
        Ok(ApiResponse::listing(income, "No income recorded yet"))
    }
}
