//! Panel de administración de una empresa de transporte
//!
//! API HTTP sobre SQLite: conductores, vehículos, gastos, ingresos,
//! asistencia, seguros y tareas, con reportes y exportación CSV.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer;
use state::AppState;

/// Router completo de la aplicación con sus capas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins, state.config.is_development());

    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::create_api_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
