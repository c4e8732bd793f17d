use axum::{extract::State, http::HeaderMap, routing::{get, post}, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, SessionStatusResponse};
use crate::middleware::auth::bearer_token;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session_status))
}

async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(&state);
    let response = controller.login(&state, request).await?;
    Ok(Json(response))
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionStatusResponse> {
    let controller = AuthController::new(&state);
    Json(controller.logout(&state, bearer_token(&headers)).await)
}

async fn session_status(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionStatusResponse> {
    let controller = AuthController::new(&state);
    Json(controller.status(&state, bearer_token(&headers)).await)
}
