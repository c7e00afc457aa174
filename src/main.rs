//! # find-prime — CLI Entry Point
//!
//! Prints one random probable prime p < 2^bits (default 256) with
//! gcd(p - 1, 3) = 1, in decimal, on stdout.
//!
//! ## Options
//!
//! - `--bits` / `FIELDPRIME_BITS`: bit length (default 256).
//! - `--mr-rounds` / `FIELDPRIME_MR_ROUNDS`: Miller–Rabin rounds (default 64).
//! - `--exponent` / `FIELDPRIME_EXPONENT`: side-condition exponent (default 3).
//! - `--seed` / `FIELDPRIME_SEED`: reproducible runs.

use anyhow::Result;
use fieldprime::cli::{self, FindPrimeArgs};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    cli::init_logging();

    let args: FindPrimeArgs = cli::parse_or_exit();
    let stdout = std::io::stdout();
    cli::run_find_prime(&args, &mut stdout.lock())
}
