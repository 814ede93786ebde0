use std::process::ExitCode;

use clap::Parser;
use signup_tokens::cli::{Cli, run};

fn main() -> ExitCode {
    // Enable basic logging; set RUST_LOG=info for visibility.
    env_logger::init();

    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run(&cli, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            // Missing or bad configuration is fatal; say so loudly.
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
