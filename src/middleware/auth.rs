//! Middleware de autenticación
//!
//! Todas las rutas del panel, salvo login y estado de sesión, exigen un
//! token Bearer cuya sesión siga registrada en el servidor.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::header;

use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::extract_token_from_header;

/// Token Bearer de la request, si viene
pub fn bearer_token(request_headers: &http::HeaderMap) -> Option<&str> {
    request_headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| extract_token_from_header(value).ok())
}

/// Resuelve la sesión y la inyecta como extensión `AdminSession`
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Login required".to_string()))?;

    let session = AuthService::from_state(&state).authenticate(&state, token).await?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
