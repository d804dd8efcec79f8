//! CLI surface for the client-assertion tools.
//!
//! Two binaries share this crate:
//!
//! - `client-assertion` - signs an OAuth2 client assertion and writes the
//!   compact JWS to stdout
//! - `jwks-gen` - renders the public half of an RSA key as a JWKS document
//!
//! All diagnostics go to stderr; stdout carries only the produced artifact.

/// Module for command-line argument resolution
pub mod cli;
