pub mod attendance_controller;
pub mod auth_controller;
pub mod dashboard_controller;
pub mod driver_controller;
pub mod expense_controller;
pub mod export_controller;
pub mod income_controller;
pub mod report_controller;
pub mod task_controller;
pub mod vehicle_controller;
pub mod view_controller;
