//! Compact HMAC-signed bearer tokens: `<header>.<payload>.<signature>`.
//! Used by: auth, state, handlers.

pub mod algorithm;
pub mod claims;
pub mod sign;
pub mod verify;

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::clock::{Clock, SystemClock};
use crate::config::TokenConfig;
use crate::error::{Error, Result};

pub use algorithm::Algorithm;
pub use claims::Claims;

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Tokens longer than this are rejected before any cryptographic work.
pub const MAX_TOKEN_LEN: usize = 8 * 1024;

/// Shared HMAC secret. Redacted in debug output, zeroed on drop.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::Config("signing secret must not be empty".into()));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningSecret([REDACTED; {}])", self.0.len())
    }
}

impl Drop for SigningSecret {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

/// Issues and verifies tokens under one secret and one pinned algorithm.
///
/// Immutable after construction; share it behind an `Arc` or clone it.
/// `issue` and `verify` take `&self` and never block.
#[derive(Clone)]
pub struct TokenCodec {
    mac: HmacSha256,
    algorithm: Algorithm,
    header_b64: String,
    default_ttl: u64,
    allow_non_expiring: bool,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(config: &TokenConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &TokenConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(config.secret.as_bytes())
            .map_err(|e| Error::Config(format!("hmac key: {e}")))?;
        let header_b64 = URL_SAFE_NO_PAD.encode(config.algorithm.header_json());
        Ok(Self {
            mac,
            algorithm: config.algorithm,
            header_b64,
            default_ttl: config.ttl_seconds,
            allow_non_expiring: config.allow_non_expiring,
            clock,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    /// Base64url (unpadded) HMAC over the literal encoded `header.payload` text.
    pub(crate) fn signature(&self, signing_input: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(signing_input.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .field("default_ttl", &self.default_ttl)
            .field("allow_non_expiring", &self.allow_non_expiring)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::clock::FixedClock;

    pub const SECRET: &[u8] = b"test-secret-with-at-least-thirty-two-bytes";

    pub fn config(secret: &[u8]) -> TokenConfig {
        TokenConfig::new(SigningSecret::new(secret).unwrap())
    }

    pub fn codec_at(now: i64) -> (TokenCodec, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(now));
        let codec = TokenCodec::with_clock(&config(SECRET), clock.clone()).unwrap();
        (codec, clock)
    }

    pub fn random_secret() -> Vec<u8> {
        use rand::RngCore;
        let mut bytes = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes
    }
}
