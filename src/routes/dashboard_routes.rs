use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::dashboard_controller::DashboardController;
use crate::controllers::view_controller::{MenuView, ViewController};
use crate::dto::dashboard_dto::DashboardSummary;
use crate::dto::view_dto::{MenuEntry, ViewResponse};
use crate::state::{AdminSession, AppState};
use crate::utils::errors::AppError;
use crate::utils::extract::AppPath;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/menu", get(menu))
        .route("/views/:slug", get(render_view))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let summary = controller
        .summary(&session.username, state.config.dashboard_insurance_days)
        .await?;
    Ok(Json(summary))
}

async fn menu(State(state): State<AppState>) -> Json<Vec<MenuEntry>> {
    Json(ViewController::new(state.pool.clone()).menu())
}

async fn render_view(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ViewResponse>, AppError> {
    let view: MenuView = slug.parse()?;
    let controller = ViewController::new(state.pool.clone());
    let response = controller.render(&state, &session.username, view).await?;
    Ok(Json(response))
}
