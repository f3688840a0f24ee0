//! Process configuration, read once from the environment at startup.
//! Used by: main, state, token.

use crate::error::{Error, Result};
use crate::token::{Algorithm, SigningSecret, DEFAULT_TTL_SECONDS};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const RECOMMENDED_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: SigningSecret,
    pub algorithm: Algorithm,
    pub ttl_seconds: u64,
    /// Accept payloads without `exp` as never expiring.
    pub allow_non_expiring: bool,
}

impl TokenConfig {
    pub fn new(secret: SigningSecret) -> Self {
        Self {
            secret,
            algorithm: Algorithm::default(),
            ttl_seconds: DEFAULT_TTL_SECONDS,
            allow_non_expiring: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub token: TokenConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret = lookup("TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Config("TOKEN_SECRET is not set".into()))?;
        if secret.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                len = secret.len(),
                "TOKEN_SECRET is shorter than {} bytes",
                RECOMMENDED_SECRET_LEN
            );
        }

        let algorithm = match lookup("TOKEN_ALGORITHM") {
            Some(name) => name.parse::<Algorithm>()?,
            None => Algorithm::default(),
        };

        let ttl_seconds = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or_else(|| {
                    Error::Config(format!("TOKEN_TTL_SECONDS must be a positive integer, got {raw:?}"))
                })?,
            None => DEFAULT_TTL_SECONDS,
        };

        let allow_non_expiring = lookup("TOKEN_ALLOW_NON_EXPIRING")
            .map(|v| v == "true")
            .unwrap_or(false);
        if allow_non_expiring {
            tracing::warn!("tokens without exp will be accepted as non-expiring");
        }

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            token: TokenConfig {
                secret: SigningSecret::new(secret)?,
                algorithm,
                ttl_seconds,
                allow_non_expiring,
            },
        })
    }
}
