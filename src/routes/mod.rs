pub mod attendance_routes;
pub mod auth_routes;
pub mod dashboard_routes;
pub mod driver_routes;
pub mod expense_routes;
pub mod export_routes;
pub mod income_routes;
pub mod report_routes;
pub mod task_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn_with_state, Router};

use crate::middleware::auth::require_admin;
use crate::state::AppState;

/// Rutas `/api`: login y estado de sesión abiertos, el resto tras `require_admin`
pub fn create_api_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(dashboard_routes::create_dashboard_router())
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/expenses", expense_routes::create_expense_router())
        .nest("/income", income_routes::create_income_router())
        .nest("/attendance", attendance_routes::create_attendance_router())
        .nest("/tasks", task_routes::create_task_router())
        .nest("/reports", report_routes::create_report_router())
        .nest("/insurance", report_routes::create_insurance_router())
        .nest("/export", export_routes::create_export_router())
        .route_layer(from_fn_with_state(state, require_admin));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(protected)
}
