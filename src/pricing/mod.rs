//! The estimation core: base price, randomized perturbation, retailer
//! prices, price history and prediction, reasonability, and comparable
//! devices.
//!
//! Each component is a lightweight wrapper borrowing from a
//! [`PricingConfig`](crate::config::PricingConfig). Randomized operations
//! take the generator as `&mut R` so callers can substitute a seeded or
//! mock source.

pub mod base;
pub mod comparison;
pub mod history;
pub mod platforms;
pub mod random;
pub mod reasonability;

pub use base::BasePriceCalculator;
pub use comparison::ComparableDeviceSynthesizer;
pub use history::{PriceHistoryGenerator, PricePredictor};
pub use platforms::PlatformPriceGenerator;
pub use random::{perturb, random_in_range, round_to_hundred};
pub use reasonability::{Reasonability, ReasonabilityEvaluator};
