//! # CLI — Argument Parsing, Logging, and Tool Entry Points
//!
//! Shared by the `find-prime` and `random-bigint` binaries so each entry
//! point stays a few lines long. Every flag can also be set from the
//! environment (or a `.env` file loaded by `dotenvy`).
//!
//! ## Exit Status
//!
//! - `--help` / `--version`: printed to stdout, exit 0.
//! - Bad or missing arguments: clap's message (with usage) on stderr, exit 1.
//! - Runtime failures: `anyhow` diagnostic on stderr, exit 1.
//!
//! ## Logging
//!
//! `tracing` output always goes to stderr so stdout carries only results.
//! `LOG_FORMAT=json` switches to JSON lines; `RUST_LOG` sets the filter.
//! The default is `warn`, so a plain run prints nothing but its result;
//! `RUST_LOG=info` adds the start and result events.

use std::io::Write;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use rug::Integer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ToolError;
use crate::search::{self, SearchConfig};
use crate::{entropy, hex, DEFAULT_BITS, DEFAULT_EXPONENT, DEFAULT_MR_ROUNDS};

#[derive(Parser, Debug)]
#[command(
    name = "find-prime",
    version,
    about = "Find a random probable prime p < 2^bits with gcd(p-1, 3) = 1"
)]
pub struct FindPrimeArgs {
    /// Bit length: the prime is drawn from [0, 2^bits)
    #[arg(long, env = "FIELDPRIME_BITS", default_value_t = DEFAULT_BITS)]
    pub bits: u32,

    /// Miller-Rabin rounds (64 bounds the error probability by 2^-128)
    #[arg(long, env = "FIELDPRIME_MR_ROUNDS", default_value_t = DEFAULT_MR_ROUNDS)]
    pub mr_rounds: u32,

    /// Odd exponent e of the side condition gcd(p-1, e) = 1
    #[arg(long, env = "FIELDPRIME_EXPONENT", default_value_t = DEFAULT_EXPONENT)]
    pub exponent: u32,

    /// Seed for the random state (non-negative decimal); OS entropy if unset
    #[arg(long, env = "FIELDPRIME_SEED", value_parser = entropy::parse_seed)]
    pub seed: Option<Integer>,
}

impl FindPrimeArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            bits: self.bits,
            mr_rounds: self.mr_rounds,
            exponent: self.exponent,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "random-bigint",
    version,
    about = "Print random integers in [0, 2^bits) as zero-padded uppercase hex"
)]
pub struct RandomBigintArgs {
    /// Number of bits per integer (a multiple of 4 gives exact padding)
    pub bits: u32,

    /// Number of integers to print
    pub count: u64,

    /// Seed for the random state (non-negative decimal); OS entropy if unset
    #[arg(long, env = "FIELDPRIME_SEED", value_parser = entropy::parse_seed)]
    pub seed: Option<Integer>,
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize structured logging on stderr. Call once per process.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

/// Parse an explicit argument list. Help and version requests also come
/// back as errors; [`parse_or_exit`] tells them apart.
pub fn parse_args<P, I, T>(args: I) -> std::result::Result<P, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    P::try_parse_from(args)
}

/// Parse the process arguments or exit: 0 for help/version, 1 for usage errors.
pub fn parse_or_exit<P: Parser>() -> P {
    match parse_args::<P, _, _>(std::env::args_os()) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{}", ToolError::Usage(e.to_string()));
            std::process::exit(1);
        }
    }
}

/// Search for one prime and print it in decimal.
pub fn run_find_prime<W: Write>(args: &FindPrimeArgs, out: &mut W) -> Result<()> {
    let config = args.search_config();
    config.validate()?;
    info!(
        bits = config.bits,
        mr_rounds = config.mr_rounds,
        exponent = config.exponent,
        seeded = args.seed.is_some(),
        "find-prime starting"
    );

    let mut rand = entropy::rand_state(args.seed.as_ref())?;
    let outcome = search::search(&config, &mut rand)?;

    writeln!(out, "{}", outcome.prime).context("failed to write prime")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Print `count` random hex integers of `bits` bits.
pub fn run_random_bigint<W: Write>(args: &RandomBigintArgs, out: &mut W) -> Result<()> {
    let mut rand = entropy::rand_state(args.seed.as_ref())?;
    hex::emit(args.bits, args.count, &mut rand, out).context("failed to write integers")?;
    Ok(())
}
