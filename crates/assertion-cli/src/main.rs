//! `client-assertion` - sign an OAuth2 client assertion.
//!
//! Reads a PEM RSA private key, builds RFC 7523 claims for the resolved
//! client and audience, signs them with RS256 and writes the compact JWS to
//! stdout with no trailing newline. Everything else - usage errors, key
//! failures, tracing - goes to stderr.

use assertion_cli::cli::{CliArgs, USAGE};
use assertion_core::claims::AssertionClaims;
use assertion_core::crypto::{sign_assertion, RsaSigningKey};
use assertion_core::errors::AssertionError;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Tracing goes to stderr so stdout carries exactly the assertion
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client_assertion=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let resolved = match CliArgs::parse(&args) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("client-assertion: {e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let assertion = match run(&resolved) {
        Ok(assertion) => assertion,
        Err(e) => {
            eprintln!("client-assertion: {e}");
            return ExitCode::FAILURE;
        }
    };

    print!("{assertion}");
    if let Err(e) = std::io::stdout().flush() {
        eprintln!("client-assertion: Failed to write assertion: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// The whole pipeline: load key, build claims, sign.
fn run(args: &CliArgs) -> Result<String, AssertionError> {
    let key = RsaSigningKey::from_pem_file(&args.key_path)?;
    let claims = AssertionClaims::issue(&args.client_id, &args.aud);

    debug!(
        target: "client_assertion",
        kid = %args.kid,
        aud = %args.aud,
        jti = %claims.jti,
        "signing client assertion"
    );

    sign_assertion(&claims, &key, &args.kid)
}
