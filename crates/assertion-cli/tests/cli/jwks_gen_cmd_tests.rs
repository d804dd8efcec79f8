//! Process-level tests for the `jwks-gen` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use assertion_test_utils::rsa_fixtures::{TEST_RSA_PRIVATE_KEY_PEM, TEST_RSA_PUBLIC_KEY_PEM};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_jwks_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jwks-gen"))
        .args(args)
        .output()
        .expect("binary must spawn")
}

fn write_pem(dir: &Path, name: &str, pem: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pem).expect("pem file must write");
    path
}

fn keys_from_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.ends_with('\n'), "JWKS output is newline-terminated");
    serde_json::from_str(stdout.trim_end()).unwrap()
}

#[test]
fn renders_single_key_jwks_for_public_pem() {
    let dir = tempfile::tempdir().unwrap();
    let pem_path = write_pem(dir.path(), "public.pem", TEST_RSA_PUBLIC_KEY_PEM);

    let output = run_jwks_gen(&[pem_path.to_str().unwrap(), "test-key-01"]);

    assert!(output.status.success());
    let jwks = keys_from_stdout(&output);
    let keys = jwks["keys"].as_array().unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0]["kty"], "RSA");
    assert_eq!(keys[0]["alg"], "RS256");
    assert_eq!(keys[0]["use"], "sig");
    assert_eq!(keys[0]["kid"], "test-key-01");
    assert_eq!(keys[0]["e"], "AQAB");
}

#[test]
fn private_pem_yields_same_modulus_as_public() {
    let dir = tempfile::tempdir().unwrap();
    let public_path = write_pem(dir.path(), "public.pem", TEST_RSA_PUBLIC_KEY_PEM);
    let private_path = write_pem(dir.path(), "private.pem", TEST_RSA_PRIVATE_KEY_PEM);

    let from_public = keys_from_stdout(&run_jwks_gen(&[public_path.to_str().unwrap(), "k"]));
    let from_private = keys_from_stdout(&run_jwks_gen(&[private_path.to_str().unwrap(), "k"]));

    assert_eq!(from_public["keys"][0]["n"], from_private["keys"][0]["n"]);
}

#[test]
fn output_is_compact_json() {
    let dir = tempfile::tempdir().unwrap();
    let pem_path = write_pem(dir.path(), "public.pem", TEST_RSA_PUBLIC_KEY_PEM);

    let output = run_jwks_gen(&[pem_path.to_str().unwrap(), "k"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.trim_end().starts_with(r#"{"keys":[{"kty":"RSA","e":"#));
    assert!(!stdout.contains(' '));
}

#[test]
fn wrong_argument_count_prints_usage() {
    for args in [&[][..], &["only-one"][..], &["a", "b", "c"][..]] {
        let output = run_jwks_gen(args);

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8(output.stderr).unwrap().contains("usage:"));
    }
}

#[test]
fn non_key_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let pem_path = write_pem(dir.path(), "bogus.pem", "this is not a key");

    let output = run_jwks_gen(&[pem_path.to_str().unwrap(), "k"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn missing_file_exits_nonzero() {
    let output = run_jwks_gen(&["/nonexistent/public.pem", "k"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Failed to read key file"));
}
