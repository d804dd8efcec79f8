//! RSA key loading and RS256 assertion signing.
//!
//! The cryptographic work itself (RSASSA-PKCS1-v1_5 with SHA-256, compact
//! JWS serialization per RFC 7515) is delegated to `jsonwebtoken`. This
//! module owns the narrow seam in front of it: turning PEM text into a
//! signing handle and a claims struct into a compact token.
//!
//! # Security
//!
//! - PEM key material travels as `SecretString`, so it is redacted from
//!   Debug output and zeroized on drop
//! - The key is loaded, used for one signature, and discarded; nothing is
//!   cached or written back to disk

use crate::claims::AssertionClaims;
use crate::errors::AssertionError;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::path::Path;
use tracing::instrument;

/// A loaded RSA private key, usable for RS256 signing.
///
/// Constructed from PEM text (PKCS#1 or PKCS#8). Invalid key material is
/// rejected at construction, not at signing time.
pub struct RsaSigningKey {
    encoding_key: EncodingKey,
}

impl fmt::Debug for RsaSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigningKey")
            .field("encoding_key", &"[REDACTED]")
            .finish()
    }
}

impl RsaSigningKey {
    /// Import a PEM-encoded RSA private key.
    ///
    /// # Errors
    ///
    /// Returns `AssertionError::KeyLoad` if the PEM is not a valid RSA
    /// private key.
    pub fn from_pem(pem: &SecretString) -> Result<Self, AssertionError> {
        let encoding_key = EncodingKey::from_rsa_pem(pem.expose_secret().as_bytes())
            .map_err(|e| AssertionError::KeyLoad(format!("Invalid RSA private key: {e}")))?;

        Ok(Self { encoding_key })
    }

    /// Read a PEM file from disk and import it.
    ///
    /// # Errors
    ///
    /// Returns `AssertionError::KeyLoad` if the file is missing, unreadable,
    /// or not a valid PEM RSA private key.
    pub fn from_pem_file(path: &Path) -> Result<Self, AssertionError> {
        let pem = std::fs::read_to_string(path).map_err(|e| {
            AssertionError::KeyLoad(format!("Failed to read key file {}: {e}", path.display()))
        })?;

        Self::from_pem(&SecretString::from(pem))
    }
}

/// Sign a client assertion with RS256.
///
/// Produces a compact JWS (`base64url(header).base64url(payload).
/// base64url(signature)`) with protected header `{alg: "RS256", typ: "JWT",
/// kid}`.
///
/// # Errors
///
/// Returns `AssertionError::Signing` if the signing operation fails, e.g.
/// the key material turns out to be unsuitable for RS256.
#[instrument(skip_all, fields(kid = %key_id))]
pub fn sign_assertion(
    claims: &AssertionClaims,
    key: &RsaSigningKey,
    key_id: &str,
) -> Result<String, AssertionError> {
    let mut header = Header::new(Algorithm::RS256);
    header.typ = Some("JWT".to_string());
    header.kid = Some(key_id.to_string());

    let token = encode(&header, claims, &key.encoding_key)
        .map_err(|e| AssertionError::Signing(format!("JWT signing operation failed: {e}")))?;

    Ok(token)
}
