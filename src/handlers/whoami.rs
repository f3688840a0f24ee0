//! Echoes the caller's verified claims.
//! Used by: server.

use axum::Json;

use crate::auth::Authenticated;
use crate::token::Claims;

pub async fn whoami(Authenticated(claims): Authenticated) -> Json<Claims> {
    Json(claims.without_exp())
}
