//! Bounded random perturbation of prices.

use crate::config::IntRange;
use rand::Rng;

/// Round to the nearest 100 currency units, never below zero.
pub fn round_to_hundred(value: f64) -> f64 {
    ((value / 100.0).round() * 100.0).max(0.0)
}

/// Uniform integer draw from an inclusive range.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, range: IntRange) -> u32 {
    if range.min >= range.max {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

/// Draw uniformly from `[base * (1 - variance), base * (1 + variance)]` and
/// round to the nearest 100.
///
/// Negative bases are treated as zero.
pub fn perturb<R: Rng + ?Sized>(rng: &mut R, base_price: f64, variance: f64) -> f64 {
    let base = base_price.max(0.0);
    let low = base * (1.0 - variance);
    let high = base * (1.0 + variance);
    let draw = if high > low {
        rng.gen_range(low..=high)
    } else {
        low
    };
    round_to_hundred(draw)
}
