use crate::config::{BaseConfig, TierBonus};
use crate::models::DeviceSpecs;

/// Deterministic baseline price from brand, storage, RAM, age, and condition.
pub struct BasePriceCalculator<'a> {
    config: &'a BaseConfig,
    current_year: i32,
}

impl<'a> BasePriceCalculator<'a> {
    pub fn new(config: &'a BaseConfig, current_year: i32) -> Self {
        Self {
            config,
            current_year,
        }
    }

    /// Compute the base price. Never returns less than the configured floor.
    pub fn compute(&self, specs: &DeviceSpecs) -> f64 {
        let mut price = self.brand_baseline(&specs.brand);

        if let Some(storage) = specs.storage {
            price += tier_bonus(&self.config.storage_tiers, storage);
        }
        if let Some(ram) = specs.ram {
            price += tier_bonus(&self.config.ram_tiers, ram);
        }

        price += self.age_adjustment(specs.release_year);
        price *= self
            .config
            .condition_multipliers
            .for_condition(specs.condition);

        let floored = price.max(self.config.min_price);
        tracing::debug!(
            brand = %specs.brand,
            model = %specs.model,
            base_price = floored,
            "computed base price"
        );
        floored
    }

    /// Baseline for a brand (case-insensitive), or the generic baseline.
    pub fn brand_baseline(&self, brand: &str) -> f64 {
        let brand = brand.trim();
        self.config
            .brand_baselines
            .iter()
            .find(|b| b.brand.eq_ignore_ascii_case(brand))
            .map(|b| b.price)
            .unwrap_or(self.config.default_baseline)
    }

    /// Age term added to the running total. Unbounded below.
    pub fn age_adjustment(&self, release_year: i32) -> f64 {
        let age = i64::from(self.current_year) - i64::from(release_year);
        age as f64 * self.config.age_penalty_per_year
    }
}

/// Bonus of the highest tier whose threshold `value` reaches, or zero.
fn tier_bonus(tiers: &[TierBonus], value: u32) -> f64 {
    tiers
        .iter()
        .filter(|t| value >= t.min_gb)
        .max_by_key(|t| t.min_gb)
        .map(|t| t.bonus)
        .unwrap_or(0.0)
}
