//! Reproducible pseudo-randomness derived from birth data.
//!
//! The generator is a plain value: callers create one per chart and thread it
//! through explicitly. There is no process-wide generator.

use crate::chart::BirthData;

const LCG_MULTIPLIER: u64 = 16807;
const LCG_MODULUS: u64 = 2_147_483_647;

/// 32-bit rolling hash (`h = h * 31 + unit`) over UTF-16 code units.
pub fn hash_seed(input: &str) -> u32 {
    let hash = input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32));
    hash.unsigned_abs()
}

/// Seed for a birth-data tuple: hash of name, date, time and place concatenated.
pub fn birth_seed(birth: &BirthData) -> u32 {
    let joined = format!(
        "{}{}{}{}",
        birth.name, birth.birth_date, birth.birth_time, birth.birth_place
    );
    hash_seed(&joined)
}

/// Multiplicative linear-congruential generator (Park-Miller constants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    pub fn from_birth(birth: &BirthData) -> Self {
        Self::new(birth_seed(birth))
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    /// `floor(next_f64() * bound)`, always below `bound`.
    pub fn next_below(&mut self, bound: usize) -> usize {
        let value = (self.next_f64() * bound as f64).floor() as usize;
        value.min(bound.saturating_sub(1))
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_seed_known_values() {
        assert_eq!(hash_seed(""), 0);
        assert_eq!(hash_seed("a"), 97);
        assert_eq!(hash_seed("ab"), 97 * 31 + 98);
        // "hello" wraps past i32 range and exercises the absolute value.
        assert_eq!(hash_seed("hello"), 99_162_322);
    }

    #[test]
    fn test_hash_seed_wraps_to_absolute_value() {
        // Long inputs overflow 32 bits many times; the result must stay defined.
        let long = "x".repeat(1000);
        let value = hash_seed(&long);
        assert_eq!(value, hash_seed(&long));
    }

    #[test]
    fn test_lcg_sequence() {
        let mut rng = SeededRng::new(1);
        let first = rng.next_f64();
        assert!((first - 16807.0 / 2_147_483_647.0).abs() < 1e-15);
        let second = rng.next_f64();
        assert!((second - 282_475_249.0 / 2_147_483_647.0).abs() < 1e-15);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a: Vec<f64> = SeededRng::new(424_242).take(50).collect();
        let b: Vec<f64> = SeededRng::new(424_242).take(50).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_next_below_in_range() {
        let mut rng = SeededRng::new(987_654_321);
        for _ in 0..1000 {
            assert!(rng.next_below(360) < 360);
            assert!(rng.next_below(6) < 6);
        }
    }

    #[test]
    fn test_zero_seed_is_fixed_point() {
        let mut rng = SeededRng::new(0);
        assert_eq!(rng.next_f64(), 0.0);
        assert_eq!(rng.next_f64(), 0.0);
    }
}
