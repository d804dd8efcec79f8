//! Command-line argument resolution for `client-assertion`.
//!
//! Flags are resolved positionally: the first occurrence of a flag name is
//! looked up and its value is the next element. `--key` and `--aud` are
//! mandatory; `--kid` and `--client-id` fall back to documented defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Default key identifier placed in the JWS header when `--kid` is absent.
pub const DEFAULT_KID: &str = "api-client-demo";

/// Default client identifier (used as `iss` and `sub`) when `--client-id`
/// is absent.
pub const DEFAULT_CLIENT_ID: &str = "api-client";

/// Usage line printed to stderr on argument errors.
pub const USAGE: &str =
    "usage: client-assertion --key <private.pem> --kid <kid> --client-id <id> --aud <token-url>";

/// Argument resolution errors. Fatal; the usage line accompanies them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A mandatory flag was not supplied
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// A flag was supplied as the last argument, with no value after it
    #[error("Missing value for argument: {0}")]
    MissingValue(String),
}

/// Resolved command-line arguments.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Path to the PEM private key file.
    pub key_path: PathBuf,

    /// Key identifier for the JWS header.
    pub kid: String,

    /// Client identifier, used as both `iss` and `sub`.
    pub client_id: String,

    /// Audience, the token endpoint URL.
    pub aud: String,
}

impl CliArgs {
    /// Resolve arguments from the process argument list (without argv[0]).
    ///
    /// # Errors
    ///
    /// Returns `CliError::MissingArgument` if `--key` or `--aud` is absent,
    /// or `CliError::MissingValue` if any flag has no following value.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let key_path = flag_value(args, "--key")?
            .map(PathBuf::from)
            .ok_or(CliError::MissingArgument("--key"))?;

        let kid = flag_value(args, "--kid")?.unwrap_or(DEFAULT_KID).to_string();

        let client_id = flag_value(args, "--client-id")?
            .unwrap_or(DEFAULT_CLIENT_ID)
            .to_string();

        let aud = flag_value(args, "--aud")?
            .ok_or(CliError::MissingArgument("--aud"))?
            .to_string();

        Ok(Self {
            key_path,
            kid,
            client_id,
            aud,
        })
    }
}

/// Look up a flag's value: the element following its first occurrence.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, CliError> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(idx) => match args.get(idx + 1) {
            Some(value) => Ok(Some(value.as_str())),
            None => Err(CliError::MissingValue(flag.to_string())),
        },
    }
}
