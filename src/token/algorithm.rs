//! The single supported signing algorithm and the header it implies.
//! Used by: config, token::sign.

use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// HMAC with SHA-256.
    #[default]
    Hs256,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
        }
    }

    /// Compact JSON header. Fixed per algorithm; verifiers never read it back.
    pub(crate) fn header_json(&self) -> String {
        format!(r#"{{"alg":"{}","typ":"JWT"}}"#, self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::Hs256),
            other => Err(TokenError::UnsupportedAlgorithm(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hs256_parses() {
        assert_eq!("HS256".parse::<Algorithm>(), Ok(Algorithm::Hs256));
        for name in ["hs256", "HS384", "RS256", "none", ""] {
            assert_eq!(
                name.parse::<Algorithm>(),
                Err(TokenError::UnsupportedAlgorithm(name.to_owned()))
            );
        }
    }

    #[test]
    fn header_is_compact_json() -> Result<(), serde_json::Error> {
        let header = Algorithm::Hs256.header_json();
        assert_eq!(header, r#"{"alg":"HS256","typ":"JWT"}"#);
        let parsed: serde_json::Value = serde_json::from_str(&header)?;
        assert_eq!(parsed["alg"], "HS256");
        Ok(())
    }
}
