//! # Hex — Random Fixed-Width Hex Integers
//!
//! Emits uniformly random integers in [0, 2^N) as `0x`-prefixed, zero-padded,
//! uppercase hexadecimal, one per line. Typical use is generating round
//! constants or test vectors for a circuit over a 256-bit field.
//!
//! The pad width is N/4 digits (rounded down). When N is not a multiple of 4
//! a value may need one more digit; it is printed in full, never truncated.

use std::io::{self, Write};

use rug::rand::MutRandState;
use rug::Integer;
use tracing::warn;

/// Formatting of N-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexFormat {
    bits: u32,
}

impl HexFormat {
    pub fn new(bits: u32) -> Self {
        HexFormat { bits }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Minimum number of hex digits after the `0x` prefix.
    pub fn width(&self) -> usize {
        (self.bits >> 2) as usize
    }

    /// `0x` + uppercase hex digits, zero-padded to `width()`.
    pub fn format(&self, value: &Integer) -> String {
        format!("0x{:0width$X}", value, width = self.width())
    }

    /// One uniform draw from [0, 2^bits).
    pub fn random_value(&self, rand: &mut dyn MutRandState) -> Integer {
        Integer::from(Integer::random_bits(self.bits, rand))
    }
}

/// Write `count` random `bits`-wide values to `out`, one per line.
pub fn emit<W: Write>(
    bits: u32,
    count: u64,
    rand: &mut dyn MutRandState,
    out: &mut W,
) -> io::Result<()> {
    let format = HexFormat::new(bits);
    if bits % 4 != 0 {
        warn!(bits, width = format.width(), "bit count is not a multiple of 4, padding is approximate");
    }
    for _ in 0..count {
        let value = format.random_value(rand);
        writeln!(out, "{}", format.format(&value))?;
    }
    out.flush()
}
