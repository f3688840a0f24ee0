//! Bearer-token authentication for protected routes.
//! Used by: handlers.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::Error;
use crate::state::AppState;
use crate::token::Claims;

const SCHEME: &str = "bearer ";

/// The credential from `Authorization: Bearer <token>`, if any.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let prefix = value.get(..SCHEME.len())?;
    if !prefix.eq_ignore_ascii_case(SCHEME) {
        return None;
    }
    let token = value[SCHEME.len()..].trim();
    (!token.is_empty()).then_some(token)
}

/// Verified claims of the caller. Rejects with a uniform 401 otherwise.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Claims);

impl Authenticated {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let result = extract_bearer(&parts.headers)
            .ok_or(Error::MissingCredential)
            .and_then(|token| state.codec.verify(token).map_err(Error::from));

        match result {
            Ok(claims) => {
                state.metrics.record_verify();
                Ok(Authenticated(claims))
            }
            Err(err) => {
                state.metrics.record_rejection(&err);
                match &err {
                    Error::Token(token_err) => {
                        tracing::debug!(reason = token_err.reason(), "token rejected")
                    }
                    _ => tracing::debug!("no bearer credential"),
                }
                Err(err)
            }
        }
    }
}
