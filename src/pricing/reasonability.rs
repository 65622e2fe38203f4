//! Deal-quality verdict and explanatory factors.
//!
//! The score comes only from the price ratio while the factors come only
//! from the specs, so the two can disagree (an "excellent" deal on an old,
//! worn device still lists negative factors).

use crate::config::ReasonabilityConfig;
use crate::models::{Condition, DeviceSpecs, Impact, PlatformPrice, ReasonabilityFactor, Verdict};
use rand::Rng;

const MARKET_TRENDS: [(&str, Impact, &str); 4] = [
    (
        "High Demand",
        Impact::Positive,
        "This model is currently in high demand, which increases its value.",
    ),
    (
        "New Model Released",
        Impact::Negative,
        "A newer model was recently released, reducing this device's value.",
    ),
    (
        "Market Saturation",
        Impact::Negative,
        "Many similar devices are available, creating downward price pressure.",
    ),
    (
        "Limited Availability",
        Impact::Positive,
        "This model has limited availability, which increases its value.",
    ),
];

/// Outcome of [`ReasonabilityEvaluator::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reasonability {
    pub score: u8,
    pub verdict: Verdict,
    /// `None` when the ratio was undefined (zero estimate or no offers).
    pub ratio: Option<f64>,
    pub factors: Vec<ReasonabilityFactor>,
}

/// `min(platform price) / estimate`, or `None` if the estimate is not
/// positive or there are no offers.
pub fn price_ratio(estimated_price: f64, platform_prices: &[PlatformPrice]) -> Option<f64> {
    if estimated_price <= 0.0 || !estimated_price.is_finite() {
        return None;
    }
    platform_prices
        .iter()
        .map(|p| p.price)
        .min_by(|a, b| a.total_cmp(b))
        .map(|lowest| lowest / estimated_price)
}

pub struct ReasonabilityEvaluator<'a> {
    config: &'a ReasonabilityConfig,
    current_year: i32,
}

impl<'a> ReasonabilityEvaluator<'a> {
    pub fn new(config: &'a ReasonabilityConfig, current_year: i32) -> Self {
        Self {
            config,
            current_year,
        }
    }

    /// Band the price ratio into a verdict, draw a score from the band, and
    /// derive the factors from the device specs.
    ///
    /// An undefined ratio yields [`Verdict::Fair`].
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        specs: &DeviceSpecs,
        estimated_price: f64,
        platform_prices: &[PlatformPrice],
        rng: &mut R,
    ) -> Reasonability {
        let ratio = price_ratio(estimated_price, platform_prices);
        let verdict = match ratio {
            Some(r) => Verdict::from_ratio(r),
            None => {
                tracing::warn!(
                    estimated_price,
                    offers = platform_prices.len(),
                    "price ratio undefined; falling back to fair verdict"
                );
                Verdict::Fair
            }
        };

        let (low, high) = verdict.score_range();
        let score = rng.gen_range(low..=high);
        tracing::debug!(?ratio, %verdict, score, "evaluated reasonability");

        Reasonability {
            score,
            verdict,
            ratio,
            factors: self.factors(specs, rng),
        }
    }

    /// Factors in fixed order: age, condition, brand (optional), storage
    /// (optional), then one random market trend.
    pub fn factors<R: Rng + ?Sized>(&self, specs: &DeviceSpecs, rng: &mut R) -> Vec<ReasonabilityFactor> {
        let mut factors = vec![self.age_factor(specs), condition_factor(specs.condition)];

        if self.is_premium(&specs.brand) {
            factors.push(ReasonabilityFactor::new(
                "Premium Brand",
                Impact::Positive,
                format!(
                    "{} devices typically retain their value better than other brands.",
                    specs.brand
                ),
            ));
        }

        if let Some(storage) = specs.storage.filter(|s| *s >= self.config.high_storage_gb) {
            factors.push(ReasonabilityFactor::new(
                "High Storage Capacity",
                Impact::Positive,
                format!("{}GB storage is above average and increases value.", storage),
            ));
        }

        let (factor, impact, description) = MARKET_TRENDS[rng.gen_range(0..MARKET_TRENDS.len())];
        factors.push(ReasonabilityFactor::new(factor, impact, description));

        factors
    }

    fn age_factor(&self, specs: &DeviceSpecs) -> ReasonabilityFactor {
        let age = i64::from(self.current_year) - i64::from(specs.release_year);
        if age <= i64::from(self.config.recent_age_years) {
            ReasonabilityFactor::new(
                "Recent Release",
                Impact::Positive,
                "This device was released recently, which maintains its value.",
            )
        } else if age <= i64::from(self.config.moderate_age_years) {
            ReasonabilityFactor::new(
                "Moderately Recent",
                Impact::Neutral,
                format!(
                    "This device is {} years old, which slightly impacts its value.",
                    age
                ),
            )
        } else {
            ReasonabilityFactor::new(
                "Older Model",
                Impact::Negative,
                format!(
                    "This device is {} years old, which significantly reduces its value.",
                    age
                ),
            )
        }
    }

    fn is_premium(&self, brand: &str) -> bool {
        let brand = brand.trim();
        self.config
            .premium_brands
            .iter()
            .any(|b| b.eq_ignore_ascii_case(brand))
    }
}

fn condition_factor(condition: Condition) -> ReasonabilityFactor {
    let label = format!("{} Condition", condition.label());
    match condition {
        Condition::New | Condition::LikeNew => ReasonabilityFactor::new(
            label,
            Impact::Positive,
            "The excellent condition increases the device's value.",
        ),
        Condition::Good => ReasonabilityFactor::new(
            label,
            Impact::Neutral,
            "The good condition has a moderate impact on the device's value.",
        ),
        Condition::Fair | Condition::Poor => ReasonabilityFactor::new(
            label,
            Impact::Negative,
            format!(
                "The {} condition significantly reduces the device's value.",
                condition
            ),
        ),
    }
}
