use crate::dto::common_dto::{ApiResponse, DateRangeQuery};
use crate::dto::expense_dto::CreateExpenseRequest;
use crate::models::expense::Expense;
use crate::repositories::expense_repository::{ExpenseRepository, NewExpense};
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_optional, validate_date_range};
use sqlx::SqlitePool;
use validator::Validate;

pub struct ExpenseController {
    repository: ExpenseRepository,
}

impl ExpenseController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ExpenseRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateExpenseRequest) -> Result<ApiResponse<Expense>, AppError> {
        // Importes >= 0 y vehículo obligatorio; el vehículo no tiene que existir
        request.validate()?;

        let expense = self
            .repository
            .create(NewExpense {
                vehicle_number: request.vehicle_number.trim().to_string(),
                date: request.date,
                petrol: request.petrol,
                toll: request.toll,
                maintenance: request.maintenance,
                tips: request.tips,
                note: normalize_optional(request.note),
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            expense,
            "Expense added successfully".to_string(),
        ))
    }

    pub async fn list(&self, range: DateRangeQuery) -> Result<ApiResponse<Vec<Expense>>, AppError> {
        validate_date_range(range.start, range.end)?;
        let expenses = self.repository.list(range).await?;
        Ok(ApiResponse::listing(expenses, "No expense data available"))
    }
}
