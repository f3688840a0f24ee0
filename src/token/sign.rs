//! Token issuance.
//! Used by: callers that have already validated credentials.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::token::claims::Claims;
use crate::token::TokenCodec;

impl TokenCodec {
    /// Signs `claims` with `exp = now + ttl_seconds`.
    ///
    /// Any caller-supplied `exp` is overwritten. Output is deterministic for a
    /// fixed clock, secret and claim set.
    pub fn issue(&self, mut claims: Claims, ttl_seconds: u64) -> String {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let exp = self.clock.now().saturating_add(ttl);
        claims.set_exp(exp);

        let payload_b64 = URL_SAFE_NO_PAD.encode(claims.to_canonical_json());
        let signing_input = format!("{}.{}", self.header_b64, payload_b64);
        let signature = self.signature(&signing_input);
        tracing::debug!(exp, claims = claims.len(), "token issued");
        format!("{}.{}", signing_input, signature)
    }

    /// Issues with the configured default lifetime.
    pub fn issue_access_token(&self, claims: Claims) -> String {
        self.issue(claims, self.default_ttl)
    }
}
