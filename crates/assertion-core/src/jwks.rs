//! JWKS (RFC 7517) rendering for RSA signing keys.
//!
//! Verifiers discover the public half of the signing key through a JWKS
//! document keyed by `kid`. This module turns a PEM RSA key into that
//! document; it never serves it anywhere.

use crate::errors::AssertionError;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};

/// JSON Web Key for an RSA signing key (RFC 7517).
///
/// `n` and `e` are the big-endian modulus and public exponent,
/// base64url-encoded without padding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kty: String, // Key type, always "RSA"
    pub e: String,   // Public exponent (base64url)
    pub n: String,   // Modulus (base64url)
    pub alg: String, // Algorithm, always "RS256"
    pub kid: String, // Key ID
    #[serde(rename = "use")]
    pub use_: String, // Public key use, always "sig"
}

/// JSON Web Key Set (RFC 7517)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<JsonWebKey>,
}

/// Render the public half of a PEM RSA key as a JWK.
///
/// Accepts an SPKI public key, a PKCS#1 public key, or a private key
/// (PKCS#8 or PKCS#1) whose public half is then used.
///
/// # Errors
///
/// Returns `AssertionError::Jwks` if the input is not a parseable RSA key.
pub fn rsa_public_jwk(pem: &str, kid: &str) -> Result<JsonWebKey, AssertionError> {
    let public = parse_rsa_public(pem)?;

    Ok(JsonWebKey {
        kty: "RSA".to_string(),
        e: URL_SAFE_NO_PAD.encode(public.e().to_bytes_be()),
        n: URL_SAFE_NO_PAD.encode(public.n().to_bytes_be()),
        alg: "RS256".to_string(),
        kid: kid.to_string(),
        use_: "sig".to_string(),
    })
}

/// Render a single-key JWKS document for a PEM RSA key.
///
/// # Errors
///
/// Returns `AssertionError::Jwks` if the input is not a parseable RSA key.
pub fn jwks_document(pem: &str, kid: &str) -> Result<Jwks, AssertionError> {
    Ok(Jwks {
        keys: vec![rsa_public_jwk(pem, kid)?],
    })
}

fn parse_rsa_public(pem: &str) -> Result<RsaPublicKey, AssertionError> {
    if let Ok(public) = RsaPublicKey::from_public_key_pem(pem) {
        return Ok(public);
    }
    if let Ok(public) = RsaPublicKey::from_pkcs1_pem(pem) {
        return Ok(public);
    }
    if let Ok(private) = RsaPrivateKey::from_pkcs8_pem(pem) {
        return Ok(private.to_public_key());
    }
    if let Ok(private) = RsaPrivateKey::from_pkcs1_pem(pem) {
        return Ok(private.to_public_key());
    }

    Err(AssertionError::Jwks(
        "Input is not a PEM-encoded RSA key".to_string(),
    ))
}
