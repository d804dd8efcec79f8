//! Client assertion claims (RFC 7523).
//!
//! A client assertion identifies an OAuth2 client to the authorization
//! server's token endpoint: the client is both issuer and subject, the
//! audience is the token endpoint URL, and the assertion carries a fresh
//! `jti` so the server can reject replays.
//!
//! # Invariants
//!
//! - `exp == iat + ASSERTION_LIFETIME_SECS`, always
//! - `iss == sub` (both are the client identifier)
//! - `jti` is a freshly generated v4 UUID per assertion

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Validity window for a client assertion, in seconds.
///
/// The assertion is consumed by the token endpoint immediately after it is
/// produced, so the window stays short.
pub const ASSERTION_LIFETIME_SECS: i64 = 60;

/// Claims carried by a client assertion.
///
/// The `iss`/`sub` fields contain client identifiers and are redacted in
/// Debug output.
#[derive(Clone, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Issuer (the client identifier) - redacted in Debug output.
    pub iss: String,

    /// Subject (same client identifier as `iss`) - redacted in Debug output.
    pub sub: String,

    /// Audience, the token endpoint URL this assertion is valid for.
    pub aud: String,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds), `iat + 60`.
    pub exp: i64,

    /// Unique assertion identifier for replay detection.
    pub jti: String,
}

impl fmt::Debug for AssertionClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionClaims")
            .field("iss", &"[REDACTED]")
            .field("sub", &"[REDACTED]")
            .field("aud", &self.aud)
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .field("jti", &self.jti)
            .finish()
    }
}

impl AssertionClaims {
    /// Build the claims for a new assertion from the wall clock and a
    /// random `jti`.
    #[must_use]
    pub fn issue(client_id: &str, aud: &str) -> Self {
        Self::issue_at(client_id, aud, Utc::now().timestamp(), Uuid::new_v4())
    }

    /// Deterministic claims construction against an explicit clock and `jti`.
    ///
    /// Prefer [`AssertionClaims::issue`] in production code. This variant
    /// exists so exact claim contents can be unit-tested without wall-clock
    /// or RNG dependence.
    #[must_use]
    pub fn issue_at(client_id: &str, aud: &str, now: i64, jti: Uuid) -> Self {
        Self {
            iss: client_id.to_string(),
            sub: client_id.to_string(),
            aud: aud.to_string(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
            jti: jti.to_string(),
        }
    }
}
