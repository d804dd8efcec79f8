//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions over compact JWS strings, plus a full
//! signature-verifying decode helper.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Custom assertions for signed client assertions
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_signed_by("api-client-demo")
///     .assert_for_client("api-client")
///     .assert_audience("https://issuer/token")
///     .assert_lifetime(60);
/// ```
pub trait AssertionChecks {
    /// Assert the token is structurally a JWS with an RS256/JWT header
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert the header `kid` equals the given key ID
    fn assert_signed_by(&self, key_id: &str) -> &Self;

    /// Assert `iss` and `sub` both equal the given client ID
    fn assert_for_client(&self, client_id: &str) -> &Self;

    /// Assert the `aud` claim equals the given audience
    fn assert_audience(&self, aud: &str) -> &Self;

    /// Assert `exp - iat` equals the given number of seconds
    fn assert_lifetime(&self, seconds: i64) -> &Self;

    /// Decode the protected header without verifying the signature
    fn header_json(&self) -> serde_json::Value;

    /// Decode the claims payload without verifying the signature
    fn claims_json(&self) -> serde_json::Value;
}

fn decode_segment(token: &str, index: usize) -> serde_json::Value {
    let segment = token
        .split('.')
        .nth(index)
        .unwrap_or_else(|| panic!("JWT has no segment {index}: {token}"));
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .unwrap_or_else(|e| panic!("Failed to base64 decode JWT segment {index}: {e}"));
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("Failed to parse JWT segment {index} as JSON: {e}"))
}

impl AssertionChecks for str {
    fn assert_valid_jwt(&self) -> &Self {
        let parts: Vec<_> = self.split('.').collect();
        assert_eq!(
            parts.len(),
            3,
            "JWT must have 3 parts (header.payload.signature), got {}",
            parts.len()
        );

        let header = self.header_json();
        assert_eq!(header["alg"], "RS256", "Expected RS256 algorithm");
        assert_eq!(header["typ"], "JWT", "Expected JWT type");

        // Payload must decode too
        let _ = self.claims_json();
        self
    }

    fn assert_signed_by(&self, key_id: &str) -> &Self {
        assert_eq!(
            self.header_json()["kid"], key_id,
            "Expected header kid {key_id}"
        );
        self
    }

    fn assert_for_client(&self, client_id: &str) -> &Self {
        let claims = self.claims_json();
        assert_eq!(claims["iss"], client_id, "Expected iss {client_id}");
        assert_eq!(claims["sub"], client_id, "Expected sub {client_id}");
        self
    }

    fn assert_audience(&self, aud: &str) -> &Self {
        assert_eq!(self.claims_json()["aud"], aud, "Expected aud {aud}");
        self
    }

    fn assert_lifetime(&self, seconds: i64) -> &Self {
        let claims = self.claims_json();
        let iat = claims["iat"].as_i64().expect("iat must be an integer");
        let exp = claims["exp"].as_i64().expect("exp must be an integer");
        assert_eq!(exp - iat, seconds, "Expected exp - iat == {seconds}");
        self
    }

    fn header_json(&self) -> serde_json::Value {
        decode_segment(self, 0)
    }

    fn claims_json(&self) -> serde_json::Value {
        decode_segment(self, 1)
    }
}

/// Verify a token's RS256 signature against a public key PEM and return the
/// claims. Panics on any verification failure.
pub fn verify_rs256(token: &str, public_key_pem: &str, aud: &str) -> serde_json::Value {
    let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .expect("fixture public key must parse");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[aud]);

    decode::<serde_json::Value>(token, &key, &validation)
        .unwrap_or_else(|e| panic!("Signature verification failed: {e}"))
        .claims
}

/// True if the token's signature verifies against the given public key PEM.
pub fn verifies_against(token: &str, public_key_pem: &str, aud: &str) -> bool {
    let Ok(key) = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()) else {
        return false;
    };

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[aud]);

    decode::<serde_json::Value>(token, &key, &validation).is_ok()
}
