//! Logging setup and authentication counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, TokenError};

/// Installs the global fmt subscriber, honouring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[derive(Default)]
pub struct Metrics {
    pub tokens_issued: AtomicU64,
    pub tokens_verified: AtomicU64,
    pub rejected_malformed: AtomicU64,
    pub rejected_bad_signature: AtomicU64,
    pub rejected_expired: AtomicU64,
    pub missing_credential: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_issue(&self) {
        self.tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_verify(&self) {
        self.tokens_verified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self, err: &Error) {
        let counter = match err {
            Error::MissingCredential => &self.missing_credential,
            Error::Token(TokenError::BadSignature) => &self.rejected_bad_signature,
            Error::Token(TokenError::Expired) => &self.rejected_expired,
            Error::Token(TokenError::MalformedToken(_)) => &self.rejected_malformed,
            _ => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tokens_issued: self.tokens_issued.load(Ordering::Relaxed),
            tokens_verified: self.tokens_verified.load(Ordering::Relaxed),
            rejected_malformed: self.rejected_malformed.load(Ordering::Relaxed),
            rejected_bad_signature: self.rejected_bad_signature.load(Ordering::Relaxed),
            rejected_expired: self.rejected_expired.load(Ordering::Relaxed),
            missing_credential: self.missing_credential.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub tokens_issued: u64,
    pub tokens_verified: u64,
    pub rejected_malformed: u64,
    pub rejected_bad_signature: u64,
    pub rejected_expired: u64,
    pub missing_credential: u64,
}
