//! Shared test fixtures for the device pricing integration tests.
//!
//! Provides a pinned reference date, an estimator bound to it, a few sample
//! specs, and deterministic RNG constructors.

#![allow(dead_code)]

use chrono::NaiveDate;
use device_pricing::{Condition, DeviceSpecs, PriceEstimator};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const CURRENT_YEAR: i32 = 2026;

/// Reference date every fixture estimator is pinned to.
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(CURRENT_YEAR, 3, 15).unwrap()
}

pub fn estimator() -> PriceEstimator {
    PriceEstimator::builder().as_of(as_of()).build().unwrap()
}

/// Seeded generator for reproducible sampling loops.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator that always yields zero bits: every uniform draw lands on the
/// low end of its range and every `gen_bool(p)` with `p > 0` is true.
pub fn zeros() -> StepRng {
    StepRng::new(0, 0)
}

/// Apple, current year, 8 GB RAM, 256 GB storage, new.
pub fn flagship() -> DeviceSpecs {
    DeviceSpecs::new("Apple", "iPhone 17", CURRENT_YEAR)
        .with_ram(8)
        .with_storage(256)
        .with_processor("A19")
}

/// Unknown brand, five years old, poor condition, no optional fields.
pub fn worn_generic() -> DeviceSpecs {
    DeviceSpecs::new("Unknown", "Gizmo", CURRENT_YEAR - 5).with_condition(Condition::Poor)
}

/// A spread of specs exercising every condition and several brands.
pub fn spec_grid() -> Vec<DeviceSpecs> {
    let mut grid = Vec::new();
    for brand in ["Apple", "samsung", "GOOGLE", "Nokia"] {
        for condition in Condition::ALL {
            for age in [0, 2, 4, 9] {
                grid.push(
                    DeviceSpecs::new(brand, "Fixture", CURRENT_YEAR - age)
                        .with_condition(condition)
                        .with_ram(6)
                        .with_storage(128),
                );
            }
        }
    }
    grid.push(DeviceSpecs::new("Nokia", "Bare", CURRENT_YEAR - 20));
    grid
}
