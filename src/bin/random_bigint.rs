//! # random-bigint — CLI Entry Point
//!
//! `random-bigint <bits> <count>` prints `count` uniform integers in
//! [0, 2^bits) as `0x` + bits/4 uppercase hex digits, one per line.
//! Missing or non-integer arguments print usage to stderr and exit 1.

use anyhow::Result;
use fieldprime::cli::{self, RandomBigintArgs};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    cli::init_logging();

    let args: RandomBigintArgs = cli::parse_or_exit();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    cli::run_random_bigint(&args, &mut out)
}
