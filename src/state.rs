//! Shared application state.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::TokenConfig;
use crate::error::Result;
use crate::telemetry::Metrics;
use crate::token::{Claims, TokenCodec};

pub struct AppStateInner {
    pub codec: TokenCodec,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

impl AppStateInner {
    /// Issues an access token for a principal whose credentials the caller
    /// has already checked.
    pub fn issue_for(&self, claims: Claims) -> String {
        let token = self.codec.issue_access_token(claims);
        self.metrics.record_issue();
        token
    }
}

pub fn build_state(config: &TokenConfig) -> Result<AppState> {
    Ok(Arc::new(AppStateInner {
        codec: TokenCodec::new(config)?,
        metrics: Metrics::new(),
    }))
}

pub fn build_state_with_clock(config: &TokenConfig, clock: Arc<dyn Clock>) -> Result<AppState> {
    Ok(Arc::new(AppStateInner {
        codec: TokenCodec::with_clock(config, clock)?,
        metrics: Metrics::new(),
    }))
}
