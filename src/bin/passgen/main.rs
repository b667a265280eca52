use std::process;

use clap::Parser;

use passgen::{CategorySelection, PasswordLength};

/// Generate a random password from the OS's secure random source.
///
/// If no character categories are selected, all of them are used. Options take the
/// double-dash form only (`--length 16`, not `-length 16`).
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Length of the password.
    #[arg(long, default_value_t = 12, allow_negative_numbers = true)]
    length: i64,
    /// Include lowercase letters.
    #[arg(long)]
    lower: bool,
    /// Include uppercase letters.
    #[arg(long)]
    upper: bool,
    /// Include numbers.
    #[arg(long)]
    number: bool,
    /// Include symbols.
    #[arg(long)]
    symbol: bool,
}

impl Args {
    fn selection(&self) -> CategorySelection {
        CategorySelection {
            lowercase: self.lower,
            uppercase: self.upper,
            numbers: self.number,
            symbols: self.symbol,
        }
        .or_all()
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    let selection = args.selection();
    log::debug!("selected categories: {:?}", selection);
    let length = PasswordLength::try_from(args.length)?;
    log::debug!("requested length: {}", length.get());

    let password = passgen::generate_password(length, &selection)?;
    println!("Generated password: {}", password.as_str());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            log::debug!("exiting after error: {:?}", err);
            let (message, code) = failure(&err);
            println!("{message}");
            process::exit(code);
        }
    }
}

/// The message to print and the exit status for a failed run.
fn failure(err: &ProgError) -> (String, i32) {
    (err.to_string(), 1)
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Password length must be greater than zero")]
    LengthNotPositive(#[source] passgen::InvalidLength),
    #[error("Password length must be at most {max}", max = PasswordLength::MAX)]
    LengthTooLong(#[source] passgen::InvalidLength),
    #[error("Error generating password: {0}")]
    Generation(#[source] passgen::GenerationError),
}

impl From<passgen::InvalidLength> for ProgError {
    fn from(err: passgen::InvalidLength) -> ProgError {
        match err {
            passgen::InvalidLength::NotPositive(_) => ProgError::LengthNotPositive(err),
            passgen::InvalidLength::TooLong(_) => ProgError::LengthTooLong(err),
        }
    }
}

impl From<passgen::GenerationError> for ProgError {
    fn from(err: passgen::GenerationError) -> ProgError {
        ProgError::Generation(err)
    }
}
