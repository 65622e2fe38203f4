//! Tunable constants for the pricing simulation.
//!
//! Every threshold, bonus, variance, and pool used by the estimator lives in
//! [`PricingConfig`]. The defaults reproduce the stock behaviour; a JSON
//! document can override any subset of sections because every section is
//! `#[serde(default)]`.

use crate::error::{PricingError, Result};
use crate::models::Condition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_HISTORY_PERIODS: usize = 6;

pub const BETTER_PROS: &[&str] = &[
    "Better performance",
    "Longer battery life",
    "Better camera",
    "More storage",
    "Newer model",
];
pub const BETTER_CONS: &[&str] = &["Higher price", "Heavier", "Less compact"];
pub const WORSE_PROS: &[&str] = &[
    "More affordable",
    "Lighter weight",
    "More compact",
    "Better value",
];
pub const WORSE_CONS: &[&str] = &[
    "Lower performance",
    "Shorter battery life",
    "Less storage",
    "Older model",
];

// ---------------------------------------------------------------------------
// Shared building blocks
// ---------------------------------------------------------------------------

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A step-function bonus: applies when the attribute is at least `min_gb`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBonus {
    pub min_gb: u32,
    pub bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandBaseline {
    pub brand: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// BaseConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionMultipliers {
    pub new: f64,
    pub like_new: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

impl Default for ConditionMultipliers {
    fn default() -> Self {
        Self {
            new: 1.0,
            like_new: 0.9,
            good: 0.8,
            fair: 0.6,
            poor: 0.4,
        }
    }
}

impl ConditionMultipliers {
    pub fn for_condition(&self, condition: Condition) -> f64 {
        match condition {
            Condition::New => self.new,
            Condition::LikeNew => self.like_new,
            Condition::Good => self.good,
            Condition::Fair => self.fair,
            Condition::Poor => self.poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseConfig {
    /// Case-insensitive brand lookup.
    pub brand_baselines: Vec<BrandBaseline>,
    pub default_baseline: f64,
    pub storage_tiers: Vec<TierBonus>,
    pub ram_tiers: Vec<TierBonus>,
    /// Added once per year of age; negative so older devices lose value.
    pub age_penalty_per_year: f64,
    pub condition_multipliers: ConditionMultipliers,
    pub min_price: f64,
}

impl Default for BaseConfig {
    fn default() -> Self {
        let baseline = |brand: &str, price: f64| BrandBaseline {
            brand: brand.to_string(),
            price,
        };
        Self {
            brand_baselines: vec![
                baseline("apple", 60000.0),
                baseline("samsung", 50000.0),
                baseline("google", 45000.0),
            ],
            default_baseline: 35000.0,
            storage_tiers: vec![
                TierBonus { min_gb: 512, bonus: 15000.0 },
                TierBonus { min_gb: 256, bonus: 8000.0 },
                TierBonus { min_gb: 128, bonus: 4000.0 },
            ],
            ram_tiers: vec![
                TierBonus { min_gb: 12, bonus: 12000.0 },
                TierBonus { min_gb: 8, bonus: 8000.0 },
                TierBonus { min_gb: 6, bonus: 4000.0 },
            ],
            age_penalty_per_year: -8000.0,
            condition_multipliers: ConditionMultipliers::default(),
            min_price: 5000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// VarianceConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VarianceConfig {
    pub estimate: f64,
    pub platform: f64,
    /// Noise per period of distance from the current period.
    pub history: f64,
    pub comparison: f64,
    /// `priceRange` is `estimate * (1 -/+ range_spread)`.
    pub range_spread: f64,
}

impl Default for VarianceConfig {
    fn default() -> Self {
        Self {
            estimate: 0.05,
            platform: 0.15,
            history: 0.05,
            comparison: 0.2,
            range_spread: 0.1,
        }
    }
}

// ---------------------------------------------------------------------------
// PlatformConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Priority order; a front slice is taken per estimate.
    pub roster: Vec<Platform>,
    pub count: IntRange,
    pub in_stock_probability: f64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        let platform = |name: &str, url: &str| Platform {
            name: name.to_string(),
            url: Some(url.to_string()),
        };
        Self {
            roster: vec![
                platform("Amazon", "https://www.amazon.in"),
                platform("Flipkart", "https://www.flipkart.com"),
                platform("Croma", "https://www.croma.com"),
                platform("Reliance Digital", "https://www.reliancedigital.in"),
                platform("Vijay Sales", "https://www.vijaysales.com"),
                platform("Samsung Store", "https://www.samsung.com/in"),
                platform("Apple Store", "https://www.apple.com/in"),
            ],
            count: IntRange::new(3, 5),
            in_stock_probability: 0.8,
        }
    }
}

// ---------------------------------------------------------------------------
// ReasonabilityConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReasonabilityConfig {
    pub premium_brands: Vec<String>,
    pub high_storage_gb: u32,
    pub recent_age_years: i32,
    pub moderate_age_years: i32,
}

impl Default for ReasonabilityConfig {
    fn default() -> Self {
        Self {
            premium_brands: vec!["apple".to_string(), "samsung".to_string()],
            high_storage_gb: 256,
            recent_age_years: 1,
            moderate_age_years: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonConfig {
    pub count: IntRange,
    pub price_offset: IntRange,
    pub better_score: IntRange,
    pub worse_score: IntRange,
    /// One of these is added to RAM on a better device.
    pub ram_boost_choices: Vec<u32>,
    /// One of these is subtracted from RAM on a worse device.
    pub ram_cut_choices: Vec<u32>,
    pub ram_floor_gb: u32,
    pub storage_multiplier: u32,
    /// Storage on a worse device is divided by one of these.
    pub storage_divisors: Vec<u32>,
    pub pros_count: IntRange,
    pub cons_count: IntRange,
    pub better_pros: Vec<String>,
    pub better_cons: Vec<String>,
    pub worse_pros: Vec<String>,
    pub worse_cons: Vec<String>,
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            count: IntRange::new(3, 5),
            price_offset: IntRange::new(5000, 15000),
            better_score: IntRange::new(75, 95),
            worse_score: IntRange::new(55, 75),
            ram_boost_choices: vec![2, 4],
            ram_cut_choices: vec![2, 0],
            ram_floor_gb: 2,
            storage_multiplier: 2,
            storage_divisors: vec![1, 2],
            pros_count: IntRange::new(2, 4),
            cons_count: IntRange::new(2, 3),
            better_pros: owned(BETTER_PROS),
            better_cons: owned(BETTER_CONS),
            worse_pros: owned(WORSE_PROS),
            worse_cons: owned(WORSE_CONS),
        }
    }
}

// ---------------------------------------------------------------------------
// PredictionConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictionConfig {
    pub three_month_decline_probability: f64,
    pub three_month_decline: f64,
    pub three_month_rise: f64,
    pub six_month_decline_probability: f64,
    pub six_month_decline: f64,
    pub six_month_rise: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            three_month_decline_probability: 0.8,
            three_month_decline: 0.9,
            three_month_rise: 1.05,
            six_month_decline_probability: 0.7,
            six_month_decline: 0.85,
            six_month_rise: 1.03,
        }
    }
}

// ---------------------------------------------------------------------------
// PricingConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingConfig {
    pub base: BaseConfig,
    pub variance: VarianceConfig,
    pub platforms: PlatformConfig,
    pub reasonability: ReasonabilityConfig,
    pub comparison: ComparisonConfig,
    pub prediction: PredictionConfig,
    pub history_periods: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig::default(),
            variance: VarianceConfig::default(),
            platforms: PlatformConfig::default(),
            reasonability: ReasonabilityConfig::default(),
            comparison: ComparisonConfig::default(),
            prediction: PredictionConfig::default(),
            history_periods: DEFAULT_HISTORY_PERIODS,
        }
    }
}

impl PricingConfig {
    /// Parse a (possibly partial) JSON document. Missing sections keep
    /// their defaults. The result is validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PricingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Check that the configuration keeps the estimator's output invariants
    /// satisfiable.
    pub fn validate(&self) -> Result<()> {
        let base = &self.base;
        check_non_negative("base.minPrice", base.min_price)?;
        check_non_negative("base.defaultBaseline", base.default_baseline)?;
        for baseline in &base.brand_baselines {
            let name = format!("base.brandBaselines[{}]", baseline.brand);
            check_non_negative(&name, baseline.price)?;
        }
        for (name, tiers) in [
            ("base.storageTiers", &base.storage_tiers),
            ("base.ramTiers", &base.ram_tiers),
        ] {
            if tiers.iter().any(|t| !t.bonus.is_finite()) {
                return Err(invalid(format!("{} bonuses must be finite", name)));
            }
        }
        if !(base.age_penalty_per_year.is_finite() && base.age_penalty_per_year <= 0.0) {
            return Err(invalid(format!(
                "base.agePenaltyPerYear must be zero or negative, got {}",
                base.age_penalty_per_year
            )));
        }

        let m = &base.condition_multipliers;
        let ordered = [m.new, m.like_new, m.good, m.fair, m.poor];
        if ordered.iter().any(|v| !(v.is_finite() && *v >= 0.0))
            || ordered.windows(2).any(|w| w[1] > w[0])
        {
            return Err(invalid(
                "base.conditionMultipliers must be non-negative and non-increasing from new to poor"
                    .to_string(),
            ));
        }

        let v = &self.variance;
        for (name, value) in [
            ("estimate", v.estimate),
            ("platform", v.platform),
            ("history", v.history),
            ("comparison", v.comparison),
            ("rangeSpread", v.range_spread),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(invalid(format!(
                    "variance.{} must be in [0, 1), got {}",
                    name, value
                )));
            }
        }

        let p = &self.platforms;
        check_range("platforms.count", p.count)?;
        if p.roster.is_empty() || p.count.min == 0 {
            return Err(invalid("platforms must select at least one platform".to_string()));
        }
        if p.count.max as usize > p.roster.len() {
            return Err(invalid(format!(
                "platforms.count.max ({}) exceeds roster size ({})",
                p.count.max,
                p.roster.len()
            )));
        }
        check_probability("platforms.inStockProbability", p.in_stock_probability)?;

        let c = &self.comparison;
        for (name, range) in [
            ("comparison.count", c.count),
            ("comparison.priceOffset", c.price_offset),
            ("comparison.betterScore", c.better_score),
            ("comparison.worseScore", c.worse_score),
            ("comparison.prosCount", c.pros_count),
            ("comparison.consCount", c.cons_count),
        ] {
            check_range(name, range)?;
        }
        if c.better_score.max > 100 || c.worse_score.max > 100 {
            return Err(invalid("comparison scores must not exceed 100".to_string()));
        }
        if c.ram_boost_choices.is_empty() || c.ram_cut_choices.is_empty() {
            return Err(invalid("comparison RAM choices must not be empty".to_string()));
        }
        if c.storage_divisors.is_empty() || c.storage_divisors.contains(&0) {
            return Err(invalid(
                "comparison.storageDivisors must be non-empty and non-zero".to_string(),
            ));
        }
        let pros_max = c.pros_count.max as usize;
        let cons_max = c.cons_count.max as usize;
        if pros_max > c.better_pros.len().min(c.worse_pros.len())
            || cons_max > c.better_cons.len().min(c.worse_cons.len())
        {
            return Err(invalid(
                "comparison pros/cons counts exceed their pools".to_string(),
            ));
        }

        let pr = &self.prediction;
        check_probability(
            "prediction.threeMonthDeclineProbability",
            pr.three_month_decline_probability,
        )?;
        check_probability(
            "prediction.sixMonthDeclineProbability",
            pr.six_month_decline_probability,
        )?;

        if self.history_periods == 0 {
            return Err(invalid("historyPeriods must be at least 1".to_string()));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> PricingError {
    PricingError::InvalidConfig(msg)
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(invalid(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

fn check_range(name: &str, range: IntRange) -> Result<()> {
    if range.min > range.max {
        return Err(invalid(format!(
            "{} is inverted: min {} > max {}",
            name, range.min, range.max
        )));
    }
    Ok(())
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(invalid(format!("{} must be in [0, 1], got {}", name, p)));
    }
    Ok(())
}
