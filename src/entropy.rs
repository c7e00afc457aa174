//! # Entropy — Random State Construction
//!
//! Both tools draw from a GMP random state (`rug::rand::RandState`, Mersenne
//! Twister). It is seeded either from an explicit seed, which makes every run
//! reproducible, or from 256 bits of operating-system entropy. The OS seed is
//! logged at debug level so an unseeded run can be replayed with `--seed`.

use rand::rngs::OsRng;
use rand::RngCore;
use rug::integer::Order;
use rug::rand::RandState;
use rug::Integer;
use tracing::debug;

use crate::error::ToolError;

/// Bytes of OS entropy used for an implicit seed.
const OS_SEED_BYTES: usize = 32;

/// Random state seeded deterministically from `seed`.
pub fn seeded(seed: &Integer) -> RandState<'static> {
    let mut rand = RandState::new();
    rand.seed(seed);
    rand
}

/// Draw a fresh seed from the operating system.
pub fn os_seed() -> Result<Integer, ToolError> {
    let mut bytes = [0u8; OS_SEED_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| ToolError::DependencyUnavailable(format!("OS entropy source: {}", e)))?;
    Ok(Integer::from_digits(&bytes, Order::Lsf))
}

/// Random state for a run: the explicit seed if given, OS entropy otherwise.
pub fn rand_state(seed: Option<&Integer>) -> Result<RandState<'static>, ToolError> {
    match seed {
        Some(seed) => {
            debug!(seed = %seed, "using explicit seed");
            Ok(seeded(seed))
        }
        None => {
            let seed = os_seed()?;
            debug!(seed = %seed, "seeded from OS entropy");
            Ok(seeded(&seed))
        }
    }
}

/// Parse a `--seed` value: a non-negative decimal integer of any size.
pub fn parse_seed(s: &str) -> Result<Integer, String> {
    let seed: Integer = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid seed {:?}: {}", s, e))?;
    if seed < 0 {
        return Err(format!("seed must be non-negative, got {}", seed));
    }
    Ok(seed)
}
