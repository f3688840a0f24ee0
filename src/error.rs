//! Unified error types for tokengate.
//! Used by: token, config, auth, handlers.

use axum::http::header::WWW_AUTHENTICATE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Why a token was refused. The distinction is for logs and metrics only;
/// every variant maps to the same external response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("bad signature")]
    BadSignature,

    #[error("token expired")]
    Expired,

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl TokenError {
    /// Stable label for log fields and counters.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::MalformedToken(_) => "malformed",
            TokenError::BadSignature => "bad_signature",
            TokenError::Expired => "expired",
            TokenError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("missing bearer credential")]
    MissingCredential,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential
                | Error::Token(
                    TokenError::MalformedToken(_) | TokenError::BadSignature | TokenError::Expired
                )
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.is_unauthenticated() {
            return (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, "Bearer")],
                "unauthenticated",
            )
                .into_response();
        }
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn every_auth_failure_looks_the_same() {
        let failures = [
            Error::MissingCredential,
            Error::Token(TokenError::MalformedToken("two parts".into())),
            Error::Token(TokenError::BadSignature),
            Error::Token(TokenError::Expired),
        ];
        for err in failures {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
            assert_eq!(body_text(response).await, "unauthenticated");
        }
    }

    #[test]
    fn unsupported_algorithm_is_a_server_fault() {
        let err = Error::Token(TokenError::UnsupportedAlgorithm("RS256".into()));
        assert!(!err.is_unauthenticated());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_error_returns_500() {
        let response = Error::Config("TOKEN_SECRET is not set".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn reasons_are_stable() {
        assert_eq!(TokenError::MalformedToken("x".into()).reason(), "malformed");
        assert_eq!(TokenError::BadSignature.reason(), "bad_signature");
        assert_eq!(TokenError::Expired.reason(), "expired");
        assert_eq!(
            TokenError::UnsupportedAlgorithm("none".into()).reason(),
            "unsupported_algorithm"
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(TokenError::Expired.to_string(), "token expired");
        assert_eq!(
            Error::Token(TokenError::BadSignature).to_string(),
            "bad signature"
        );
        assert_eq!(
            TokenError::UnsupportedAlgorithm("RS256".into()).to_string(),
            "unsupported algorithm: RS256"
        );
    }
}
