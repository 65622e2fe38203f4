//! Device pricing SDK for Rust.
//!
//! Produces a simulated price estimate, a reasonability verdict, and a list
//! of comparable devices from user-entered device specs. Every figure is
//! arithmetic over the specs plus bounded randomness; nothing is fetched or
//! persisted.
//!
//! # Quick start
//!
//! ```no_run
//! use device_pricing::{DeviceSpecs, PriceEstimator};
//!
//! let estimator = PriceEstimator::builder().build().unwrap();
//! let specs = DeviceSpecs::new("Apple", "iPhone 15", 2025)
//!     .with_ram(8)
//!     .with_storage(256);
//!
//! let estimate = estimator.estimate(&specs);
//! let alternatives = estimator.compare(&specs);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod pricing;

pub use config::PricingConfig;
pub use error::{PricingError, Result};
pub use models::{
    sort_by_price, sort_by_recommendation, ComparisonResult, Condition, DeviceSpecs, DeviceType,
    Impact, PlatformPrice, PriceEstimate, PricePoint, PricePrediction, PriceRange,
    ReasonabilityFactor, Verdict,
};

use chrono::{Datelike, Local, NaiveDate};
use pricing::{
    perturb, BasePriceCalculator, ComparableDeviceSynthesizer, PlatformPriceGenerator,
    PriceHistoryGenerator, PricePredictor, ReasonabilityEvaluator,
};
use rand::Rng;
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// PriceEstimatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PriceEstimator`].
///
/// Use [`PriceEstimator::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PriceEstimatorBuilder::build).
#[derive(Default)]
pub struct PriceEstimatorBuilder {
    config: Option<PricingConfig>,
    as_of: Option<NaiveDate>,
}

impl PriceEstimatorBuilder {
    /// Use a custom configuration instead of [`PricingConfig::default()`].
    pub fn config(mut self, config: PricingConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load the configuration from a JSON file.
    pub fn config_path<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.config = Some(PricingConfig::from_path(path)?);
        Ok(self)
    }

    /// Pin the reference date used for device age and history labels.
    ///
    /// If not set, the local date is read on every call.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<PriceEstimator> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(PriceEstimator {
            config,
            as_of: self.as_of,
        })
    }
}

// ---------------------------------------------------------------------------
// PriceEstimator
// ---------------------------------------------------------------------------

/// The main entry point for price estimation and comparison.
///
/// Holds only immutable configuration; every call receives all of its
/// input as arguments. Component accessors return lightweight borrowing
/// wrappers for callers that need a single stage.
#[derive(Debug, Clone, Default)]
pub struct PriceEstimator {
    config: PricingConfig,
    as_of: Option<NaiveDate>,
}

impl PriceEstimator {
    /// Create a new builder for configuring the estimator.
    pub fn builder() -> PriceEstimatorBuilder {
        PriceEstimatorBuilder::default()
    }

    /// Return the validated configuration the estimator was built with.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// The reference date: the pinned one, or today's local date.
    pub fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }

    // -- Component accessors -----------------------------------------------
    //
    // Entry points read the reference date once and use the `*_at` forms.

    /// Access the base price calculator for the current reference year.
    pub fn base_price(&self) -> BasePriceCalculator<'_> {
        self.base_price_at(self.today())
    }

    /// Access the retailer offer generator.
    pub fn platforms(&self) -> PlatformPriceGenerator<'_> {
        PlatformPriceGenerator::new(&self.config.platforms, self.config.variance.platform)
    }

    /// Access the reasonability evaluator for the current reference year.
    pub fn reasonability(&self) -> ReasonabilityEvaluator<'_> {
        self.reasonability_at(self.today())
    }

    /// Access the price history generator ending at the reference month.
    pub fn history(&self) -> PriceHistoryGenerator {
        self.history_at(self.today())
    }

    /// Access the three- and six-month price predictor.
    pub fn predictor(&self) -> PricePredictor<'_> {
        PricePredictor::new(&self.config.prediction)
    }

    /// Access the comparable device synthesizer.
    pub fn comparables(&self) -> ComparableDeviceSynthesizer<'_> {
        self.comparables_at(self.today())
    }

    fn base_price_at(&self, today: NaiveDate) -> BasePriceCalculator<'_> {
        BasePriceCalculator::new(&self.config.base, today.year())
    }

    fn reasonability_at(&self, today: NaiveDate) -> ReasonabilityEvaluator<'_> {
        ReasonabilityEvaluator::new(&self.config.reasonability, today.year())
    }

    fn history_at(&self, today: NaiveDate) -> PriceHistoryGenerator {
        PriceHistoryGenerator::new(
            self.config.history_periods,
            self.config.variance.history,
            today,
        )
    }

    fn comparables_at(&self, today: NaiveDate) -> ComparableDeviceSynthesizer<'_> {
        ComparableDeviceSynthesizer::new(
            self.base_price_at(today),
            &self.config.comparison,
            self.config.variance.comparison,
            self.config.base.min_price,
        )
    }

    // -- Entry points ------------------------------------------------------

    /// Generate a price estimate using the thread-local RNG.
    pub fn estimate(&self, specs: &DeviceSpecs) -> PriceEstimate {
        self.estimate_with_rng(specs, &mut rand::thread_rng())
    }

    /// Generate a price estimate drawing from `rng`.
    ///
    /// Draw order: headline estimate, retailer offers, score, market trend,
    /// history, prediction.
    pub fn estimate_with_rng<R: Rng + ?Sized>(&self, specs: &DeviceSpecs, rng: &mut R) -> PriceEstimate {
        let today = self.today();
        let base_price = self.base_price_at(today).compute(specs);
        let estimated_price = perturb(rng, base_price, self.config.variance.estimate);
        tracing::debug!(base_price, estimated_price, "synthesized headline estimate");

        let platform_prices = self.platforms().generate(estimated_price, rng);
        let reasonability = self
            .reasonability_at(today)
            .evaluate(specs, estimated_price, &platform_prices, rng);
        let price_history = self.history_at(today).generate(estimated_price, rng);
        let price_prediction = self.predictor().predict(estimated_price, rng);

        let spread = self.config.variance.range_spread;
        PriceEstimate {
            estimated_price,
            price_range: PriceRange {
                min: (estimated_price * (1.0 - spread)).round(),
                max: (estimated_price * (1.0 + spread)).round(),
            },
            reasonability_score: reasonability.score,
            reasonability_verdict: reasonability.verdict,
            reasonability_factors: reasonability.factors,
            platform_prices,
            price_history,
            price_prediction,
        }
    }

    /// Generate comparable devices using the thread-local RNG.
    pub fn compare(&self, specs: &DeviceSpecs) -> Vec<ComparisonResult> {
        self.compare_with_rng(specs, &mut rand::thread_rng())
    }

    /// Generate comparable devices drawing from `rng`.
    pub fn compare_with_rng<R: Rng + ?Sized>(
        &self,
        specs: &DeviceSpecs,
        rng: &mut R,
    ) -> Vec<ComparisonResult> {
        self.comparables_at(self.today()).synthesize(specs, rng)
    }
}

// ---------------------------------------------------------------------------
// Free entry points
// ---------------------------------------------------------------------------

/// Estimate with the default configuration and today's date.
pub fn generate_price_estimate(specs: &DeviceSpecs) -> PriceEstimate {
    PriceEstimator::default().estimate(specs)
}

/// Comparable devices with the default configuration and today's date.
pub fn generate_comparison_results(specs: &DeviceSpecs) -> Vec<ComparisonResult> {
    PriceEstimator::default().compare(specs)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PriceEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let platforms: Vec<&str> = self
            .config
            .platforms
            .roster
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        write!(
            f,
            "PriceEstimator(as_of={}, floor={}, platforms=[{}])",
            self.today(),
            self.config.base.min_price,
            platforms.join(", ")
        )
    }
}
