//! Token verification: structure, signature, payload, expiry, in that order.
//! Used by: auth.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use subtle::ConstantTimeEq;

use crate::error::TokenError;
use crate::token::claims::{Claims, EXP};
use crate::token::{TokenCodec, MAX_TOKEN_LEN};

fn malformed(detail: impl Into<String>) -> TokenError {
    TokenError::MalformedToken(detail.into())
}

impl TokenCodec {
    /// Checks a candidate token and returns its claims, `exp` included.
    ///
    /// The signature is checked against the received `header.payload` text
    /// before anything is decoded. The header is never consulted.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if token.len() > MAX_TOKEN_LEN {
            return Err(malformed("token too long"));
        }

        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed("expected three segments"));
        };
        if header_b64.is_empty() || payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(malformed("empty segment"));
        }

        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
        let expected = self.signature(signing_input);
        if !bool::from(expected.as_bytes().ct_eq(signature_b64.as_bytes())) {
            return Err(TokenError::BadSignature);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|e| malformed(format!("payload encoding: {e}")))?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|e| malformed(format!("payload json: {e}")))?;

        match claims.get(EXP) {
            Some(_) => {
                let exp = claims.exp().ok_or_else(|| malformed("exp is not an integer"))?;
                if self.clock.now() > exp {
                    return Err(TokenError::Expired);
                }
            }
            None if self.allow_non_expiring => {}
            None => return Err(malformed("missing exp")),
        }

        Ok(claims)
    }
}
