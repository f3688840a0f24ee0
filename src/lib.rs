//! tokengate: signed, expiring bearer tokens for API authentication.
//! Used by: binary entrypoint, request-authentication callers.

pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

pub use auth::{extract_bearer, Authenticated};
pub use error::{Error, Result, TokenError};
pub use token::{Claims, TokenCodec};
