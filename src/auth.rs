use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Basic};

use crate::{config::Config, errors::AppError, state::AppState};

pub const ADMIN_REALM: &str = "Basic realm=\"admin\"";

/// Proof that the request carried the admin's Basic credentials.
pub struct AdminAuth(pub String);

/// The error response plus the Basic challenge, so browsers prompt for
/// credentials.
pub fn challenge(err: AppError) -> Response {
    let (status, message) = err.to_response();
    (status, [(header::WWW_AUTHENTICATE, ADMIN_REALM)], message).into_response()
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    challenge(AppError::Unauthorized(
                        "Missing or invalid Authorization header".to_string(),
                    ))
                })?;

        AdminAuth::verify(basic.username(), basic.password(), &state.config).map_err(challenge)
    }
}

impl AdminAuth {
    pub fn verify(username: &str, password: &str, config: &Config) -> Result<Self, AppError> {
        if username == config.admin_user && password == config.admin_pass {
            Ok(Self(username.to_string()))
        } else {
            tracing::warn!("Rejected admin login for user: {}", username);
            Err(AppError::Unauthorized("Invalid credentials".to_string()))
        }
    }
}
