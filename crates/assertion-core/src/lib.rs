//! Core library for OAuth2 client-assertion generation.
//!
//! This crate holds everything below the CLI surface:
//!
//! - `claims` - Client assertion claims (RFC 7523) and their invariants
//! - `crypto` - RSA private key loading and RS256 signing
//! - `jwks` - JWKS rendering for the public half of a signing key
//! - `errors` - Error types

#![warn(clippy::pedantic)]

/// Module for error types
pub mod errors;

/// Module for client assertion claims
pub mod claims;

/// Module for key loading and RS256 signing
pub mod crypto;

/// Module for JWKS (RFC 7517) rendering
pub mod jwks;
