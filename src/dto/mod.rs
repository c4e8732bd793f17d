pub mod attendance_dto;
pub mod auth_dto;
pub mod common_dto;
pub mod dashboard_dto;
pub mod driver_dto;
pub mod expense_dto;
pub mod income_dto;
pub mod report_dto;
pub mod task_dto;
pub mod vehicle_dto;
pub mod view_dto;
