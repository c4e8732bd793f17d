pub mod admin_repository;
pub mod attendance_repository;
pub mod driver_repository;
pub mod expense_repository;
pub mod income_repository;
pub mod task_repository;
pub mod vehicle_repository;
