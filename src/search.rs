//! # Search — Prime Candidate Search
//!
//! Finds a probable prime p < 2^B with gcd(p − 1, e) = 1. For the default
//! e = 3 this makes x ↦ x³ a permutation of Z/pZ, which is what cube-based
//! ciphers and hashes (MiMC and friends) need from their field modulus.
//!
//! ## Algorithm
//!
//! 1. **Random start**: draw x uniformly from [0, 2^B) and force it odd.
//!
//! 2. **Odd walk**: test x, then x + 2, x + 4, ... Each candidate goes
//!    through the side condition first (one gcd with a word), then GMP's
//!    `mpz_probab_prime_p`, which does its own trial division and BPSW
//!    before the requested Miller–Rabin rounds.
//!
//! 3. **Wrap**: a candidate that reaches 2^B continues from the bottom of
//!    the range (subtracting 2^B keeps it odd), so the result is always
//!    below 2^B. For B ≥ 2 and odd e the prime 3 always qualifies, so a
//!    wrapped walk is guaranteed to stop.
//!
//! ## Complexity
//!
//! Prime density near 2^B is about 2/(B ln 2) among odd numbers, and half of
//! the primes are ≡ 2 (mod 3), so roughly B·ln 2 candidates are visited on
//! average (~180 for B = 256). A third of them never reach GMP.

use rug::integer::IsPrime;
use rug::rand::MutRandState;
use rug::Integer;
use tracing::{debug, info};

use crate::error::ToolError;

/// Parameters of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Result is drawn from [0, 2^bits).
    pub bits: u32,
    /// Miller–Rabin rounds for the final primality test.
    pub mr_rounds: u32,
    /// Side condition gcd(p - 1, exponent) = 1.
    pub exponent: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            bits: crate::DEFAULT_BITS,
            mr_rounds: crate::DEFAULT_MR_ROUNDS,
            exponent: crate::DEFAULT_EXPONENT,
        }
    }
}

impl SearchConfig {
    /// Reject parameters for which the walk cannot succeed. An even exponent
    /// is never satisfied, since every odd candidate has an even p - 1.
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.bits < 2 {
            return Err(ToolError::Usage(format!(
                "bits must be at least 2 (no odd prime below 2^{})",
                self.bits
            )));
        }
        if self.mr_rounds == 0 {
            return Err(ToolError::Usage("mr-rounds must be at least 1".into()));
        }
        if self.exponent < 3 || self.exponent % 2 == 0 {
            return Err(ToolError::Usage(format!(
                "exponent must be odd and at least 3, got {}",
                self.exponent
            )));
        }
        Ok(())
    }
}

/// Why a candidate was turned down, or that it was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    SideCondition,
    Composite,
}

/// An accepted prime and the counters of the walk that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub prime: Integer,
    /// Candidates examined, the accepted one included.
    pub visited: u64,
    pub side_rejected: u64,
    /// Candidates handed to the primality test, the accepted one included.
    pub primality_tests: u64,
    /// The walk passed 2^bits and restarted from the bottom of the range.
    pub wrapped: bool,
}

/// gcd(x - 1, exponent) == 1.
pub fn satisfies_side_condition(x: &Integer, exponent: u32) -> bool {
    let x_minus_one = Integer::from(x - 1u32);
    x_minus_one.gcd(&Integer::from(exponent)) == 1u32
}

/// Run one candidate through the acceptance checks, cheapest first.
pub fn classify(x: &Integer, config: &SearchConfig) -> Verdict {
    if !satisfies_side_condition(x, config.exponent) {
        return Verdict::SideCondition;
    }
    if x.is_probably_prime(config.mr_rounds) == IsPrime::No {
        return Verdict::Composite;
    }
    Verdict::Accepted
}

/// True if `x` is an odd probable prime meeting the side condition.
pub fn accepts(x: &Integer, config: &SearchConfig) -> bool {
    x.is_odd() && classify(x, config) == Verdict::Accepted
}

/// Draw a random start below 2^bits and walk from it.
pub fn search(
    config: &SearchConfig,
    rand: &mut dyn MutRandState,
) -> Result<SearchOutcome, ToolError> {
    config.validate()?;
    let start = Integer::from(Integer::random_bits(config.bits, rand));
    search_from(start, config)
}

/// Walk odd candidates upward from `start` (rounded up to odd), wrapping at
/// 2^bits, until one is accepted. `validate` guarantees 3 qualifies, so the
/// walk ends within one lap.
pub fn search_from(start: Integer, config: &SearchConfig) -> Result<SearchOutcome, ToolError> {
    config.validate()?;
    let limit = Integer::from(1u32) << config.bits;
    if start < 0 || start >= limit {
        return Err(ToolError::Usage(format!(
            "start {} is outside [0, 2^{})",
            start, config.bits
        )));
    }

    let mut x = start;
    if x.is_even() {
        x += 1u32;
    }
    debug!(bits = config.bits, exponent = config.exponent, "walk started");

    let mut outcome = SearchOutcome {
        prime: Integer::new(),
        visited: 0,
        side_rejected: 0,
        primality_tests: 0,
        wrapped: false,
    };

    loop {
        outcome.visited += 1;
        match classify(&x, config) {
            Verdict::Accepted => {
                outcome.primality_tests += 1;
                info!(
                    bits = config.bits,
                    significant_bits = x.significant_bits(),
                    exponent = config.exponent,
                    visited = outcome.visited,
                    primality_tests = outcome.primality_tests,
                    wrapped = outcome.wrapped,
                    "prime found"
                );
                outcome.prime = x;
                return Ok(outcome);
            }
            Verdict::SideCondition => outcome.side_rejected += 1,
            Verdict::Composite => outcome.primality_tests += 1,
        }

        x += 2u32;
        if x >= limit {
            x -= &limit;
            outcome.wrapped = true;
            debug!(visited = outcome.visited, "walk wrapped past 2^bits");
        }
    }
}
