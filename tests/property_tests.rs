//! Property-based tests for the prime search and hex formatting.
//!
//! Each property is named `prop_<function>_<invariant>`. Inputs are kept
//! small enough (at most 128 bits) that a few hundred cases run quickly.

use fieldprime::entropy;
use fieldprime::hex::HexFormat;
use fieldprime::search::{self, SearchConfig};
use proptest::prelude::*;
use rug::integer::IsPrime;
use rug::Integer;

fn config(bits: u32) -> SearchConfig {
    SearchConfig {
        bits,
        ..SearchConfig::default()
    }
}

proptest! {
    /// For every B >= 8 and seed the result is an odd probable prime below
    /// 2^B with p ≢ 1 (mod 3).
    #[test]
    fn prop_search_meets_contract(bits in 8u32..=128, seed in any::<u64>()) {
        let mut rand = entropy::seeded(&Integer::from(seed));
        let out = search::search(&config(bits), &mut rand).unwrap();
        let p = out.prime;
        prop_assert!(p.is_odd());
        prop_assert!(p < (Integer::from(1u32) << bits));
        prop_assert_ne!(p.is_probably_prime(64), IsPrime::No);
        prop_assert!(!p.is_congruent_u(1, 3));
    }

    /// Identical seeds give identical primes.
    #[test]
    fn prop_search_deterministic_under_seed(bits in 8u32..=128, seed in any::<u64>()) {
        let c = config(bits);
        let a = search::search(&c, &mut entropy::seeded(&Integer::from(seed))).unwrap();
        let b = search::search(&c, &mut entropy::seeded(&Integer::from(seed))).unwrap();
        prop_assert_eq!(a.prime, b.prime);
    }

    /// From any start the walk either finds the first qualifying candidate
    /// at or above it, or wraps and stays below the limit.
    #[test]
    fn prop_search_from_never_leaves_range(start in 0u32..1024) {
        let c = config(10);
        let out = search::search_from(Integer::from(start), &c).unwrap();
        prop_assert!(out.prime < 1024u32);
        prop_assert!(search::accepts(&out.prime, &c));
        if !out.wrapped {
            prop_assert!(out.prime >= start);
            // Nothing qualifying was skipped between start and the result
            let mut x = Integer::from(start | 1);
            while x < out.prime {
                prop_assert!(!search::accepts(&x, &c));
                x += 2u32;
            }
        }
    }

    /// Every valid (bits, exponent, start) combination stops inside the range
    /// on a candidate that meets the side condition, including the smallest
    /// ranges where 3 is the only qualifying prime.
    #[test]
    fn prop_search_from_terminates_for_any_odd_exponent(
        bits in 2u32..=12,
        exponent in prop::sample::select(vec![3u32, 5, 9, 15, 255]),
        raw_start in any::<u32>(),
    ) {
        let c = SearchConfig { bits, exponent, ..SearchConfig::default() };
        let limit = Integer::from(1u32) << bits;
        let start = Integer::from(raw_start) % &limit;
        let out = search::search_from(start, &c).unwrap();
        prop_assert!(out.prime.is_odd());
        prop_assert!(out.prime < limit);
        prop_assert_ne!(out.prime.is_probably_prime(64), IsPrime::No);
        let side = Integer::from(&out.prime - 1u32).gcd(&Integer::from(exponent));
        prop_assert_eq!(side, 1u32);
    }

    /// Formatting pads to bits/4 digits and preserves the value.
    #[test]
    fn prop_hex_format_width(bits in (1u32..=64).prop_map(|q| q * 4), value in any::<u64>()) {
        let f = HexFormat::new(bits);
        let v = Integer::from(value) % (Integer::from(1u32) << bits);
        let s = f.format(&v);
        prop_assert_eq!(s.len(), 2 + (bits as usize / 4));
        let parsed = Integer::from_str_radix(&s[2..], 16).unwrap();
        prop_assert_eq!(parsed, v);
    }
}
