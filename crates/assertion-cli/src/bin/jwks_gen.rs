//! `jwks-gen` - render the public half of an RSA key as a JWKS document.
//!
//! Companion to `client-assertion`: the verifier side fetches the public key
//! by `kid` from a JWKS, and this tool produces that document from a PEM
//! key. Compact JSON on stdout, diagnostics on stderr.

use assertion_core::jwks;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: jwks-gen <public.pem> <kid>";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwks_gen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (pem_path, kid) = match (args.first(), args.get(1)) {
        (Some(pem_path), Some(kid)) if args.len() == 2 => (pem_path, kid),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let pem = match std::fs::read_to_string(pem_path) {
        Ok(pem) => pem,
        Err(e) => {
            eprintln!("jwks-gen: Failed to read key file {pem_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let document = match jwks::jwks_document(&pem, kid) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("jwks-gen: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(&document) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("jwks-gen: {e}");
            ExitCode::FAILURE
        }
    }
}
