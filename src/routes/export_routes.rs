use axum::{
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use http::header;

use crate::controllers::export_controller::ExportController;
use crate::services::export_service::ExportTable;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppPath;

pub fn create_export_router() -> Router<AppState> {
    Router::new().route("/:table", get(export_table))
}

/// Descarga CSV como adjunto `<tabla>.csv`
async fn export_table(
    State(state): State<AppState>,
    AppPath(table): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let table: ExportTable = table.parse()?;
    let controller = ExportController::new(state.pool.clone());
    let export = controller.export(table).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.file_name),
        ),
    ];

    Ok((headers, export.content))
}
