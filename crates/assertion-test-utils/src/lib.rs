//! # Assertion Test Utilities
//!
//! Shared test utilities for the client-assertion workspace.
//!
//! This crate provides:
//! - Fixed RSA key fixtures (reproducible, checked in as PEM constants)
//! - Custom assertions over compact JWS strings (`AssertionChecks` trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use assertion_test_utils::assertions::AssertionChecks;
//! use assertion_test_utils::rsa_fixtures::TEST_RSA_PRIVATE_KEY_PEM;
//!
//! token
//!     .assert_valid_jwt()
//!     .assert_signed_by("test-key-01")
//!     .assert_for_client("api-client");
//! ```

pub mod assertions;
pub mod rsa_fixtures;
