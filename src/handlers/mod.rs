//! HTTP handler modules.
//! Used by: server.

pub mod status;
pub mod whoami;
