use crate::dto::auth_dto::{LoginRequest, LoginResponse, SessionStatusResponse};
use crate::services::auth_service::AuthService;
use crate::state::{AdminSession, AppState};
use crate::utils::errors::AppError;
use validator::Validate;

pub struct AuthController {
    service: AuthService,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: AuthService::from_state(state),
        }
    }

    /// Login del administrador
    pub async fn login(&self, state: &AppState, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let session = self
            .service
            .login(state, request.username.trim(), &request.password)
            .await?;

        Ok(LoginResponse {
            success: true,
            token: session.token,
            username: session.username,
            expires_in: session.expires_in,
        })
    }

    /// Cerrar sesión. Siempre termina en LoggedOut, haya token o no.
    pub async fn logout(&self, state: &AppState, token: Option<&str>) -> SessionStatusResponse {
        if let Some(session) = self.active_session(state, token).await {
            self.service.logout(state, &session.session_id).await;
        }
        SessionStatusResponse::logged_out()
    }

    /// Estado actual: sin token o con token inválido se considera LoggedOut
    pub async fn status(&self, state: &AppState, token: Option<&str>) -> SessionStatusResponse {
        match self.active_session(state, token).await {
            Some(session) => SessionStatusResponse::logged_in(session.username),
            None => SessionStatusResponse::logged_out(),
        }
    }

    async fn active_session(&self, state: &AppState, token: Option<&str>) -> Option<AdminSession> {
        self.service.authenticate(state, token?).await.ok()
    }
}
