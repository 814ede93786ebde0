//! Command-line front end for minting and checking signup tokens.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use data_encoding::BASE64URL_NOPAD;
use rand::RngCore;
use signed_token::SignedToken;

use crate::configuration::Settings;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "signup-tokens", version, about = "Mint and verify self-expiring signed tokens")]
pub struct Cli {
    /// YAML settings file
    #[arg(short, long, env = "SIGNUP_TOKENS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Environment variable holding the signing secret (overrides the settings file)
    #[arg(long, global = true)]
    pub secret_env: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a fresh token
    Mint {
        /// Lifetime in seconds (defaults to `default_ttl_secs`)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        ttl: Option<u64>,
    },
    /// Check a token; exits 0 when valid, 1 otherwise. Pass `-` to read it from stdin
    Verify { token: String },
    /// Print a random secret suitable for SIGNED_TOKENS_SECRET
    GenSecret {
        #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(16..=1024))]
        bytes: u16,
    },
}

/// What a successful run ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Valid,
    Invalid,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done | Outcome::Valid => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(1),
        }
    }
}

impl Cli {
    fn settings(&self) -> Result<Settings, CliError> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(name) = &self.secret_env {
            settings.secret_env = name.clone();
            settings.validate()?;
        }
        Ok(settings)
    }

    fn tokens(&self) -> Result<SignedToken, CliError> {
        let settings = self.settings()?;
        let config = settings.token_config()?;
        log::debug!(
            "signing secret loaded from ${}, default ttl {:?}",
            settings.secret_env,
            config.default_ttl()
        );
        Ok(SignedToken::new(config))
    }
}

/// Execute `cli`, writing results to `out` and reading `-` tokens from `input`.
pub fn run(
    cli: &Cli,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Outcome, CliError> {
    match &cli.command {
        Command::Mint { ttl } => {
            let tokens = cli.tokens()?;
            let token = match ttl {
                Some(secs) => tokens.mint(Duration::from_secs(*secs)),
                None => tokens.mint_default(),
            };
            log::info!("minted token");
            writeln!(out, "{token}")?;
            Ok(Outcome::Done)
        }
        Command::Verify { token } => {
            let tokens = cli.tokens()?;
            let token = if token == "-" {
                let mut line = String::new();
                input.read_line(&mut line)?;
                line.trim().to_string()
            } else {
                token.clone()
            };

            if tokens.verify(&token) {
                writeln!(out, "valid")?;
                Ok(Outcome::Valid)
            } else {
                log::info!("token rejected");
                writeln!(out, "invalid")?;
                Ok(Outcome::Invalid)
            }
        }
        Command::GenSecret { bytes } => {
            let mut secret = vec![0u8; usize::from(*bytes)];
            rand::rngs::OsRng.fill_bytes(&mut secret);
            writeln!(out, "{}", BASE64URL_NOPAD.encode(&secret))?;
            Ok(Outcome::Done)
        }
    }
}
