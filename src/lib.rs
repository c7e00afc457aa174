pub mod cli;
pub mod entropy;
pub mod error;
pub mod hex;
pub mod search;

/// Rounds handed to `rug::Integer::is_probably_prime` by default. GMP runs
/// its own trial division and a BPSW test first; 64 Miller-Rabin rounds
/// bound the false-positive probability by 4^-64 = 2^-128.
pub const DEFAULT_MR_ROUNDS: u32 = 64;

/// Bit length of the field modulus searched for by default.
pub const DEFAULT_BITS: u32 = 256;

/// Default exponent e of the side condition gcd(p - 1, e) = 1. With e = 3,
/// cubing is a permutation of the field Z/pZ.
pub const DEFAULT_EXPONENT: u32 = 3;
