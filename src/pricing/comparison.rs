use super::base::BasePriceCalculator;
use super::random::{perturb, random_in_range, round_to_hundred};
use crate::config::ComparisonConfig;
use crate::models::{ComparisonResult, Condition, DeviceSpecs};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fabricates better/worse alternatives to a device.
///
/// Results are returned in generation order; callers sort as needed.
pub struct ComparableDeviceSynthesizer<'a> {
    base: BasePriceCalculator<'a>,
    config: &'a ComparisonConfig,
    variance: f64,
    min_price: f64,
}

impl<'a> ComparableDeviceSynthesizer<'a> {
    pub fn new(
        base: BasePriceCalculator<'a>,
        config: &'a ComparisonConfig,
        variance: f64,
        min_price: f64,
    ) -> Self {
        Self {
            base,
            config,
            variance,
            min_price,
        }
    }

    pub fn synthesize<R: Rng + ?Sized>(&self, specs: &DeviceSpecs, rng: &mut R) -> Vec<ComparisonResult> {
        let base_price = self.base.compute(specs);
        let count = random_in_range(rng, self.config.count) as usize;

        (0..count)
            .map(|index| self.alternative(specs, base_price, index, rng))
            .collect()
    }

    fn alternative<R: Rng + ?Sized>(
        &self,
        specs: &DeviceSpecs,
        base_price: f64,
        index: usize,
        rng: &mut R,
    ) -> ComparisonResult {
        let c = self.config;
        let is_better = rng.gen_bool(0.5);

        let offset = f64::from(random_in_range(rng, c.price_offset));
        let drawn = perturb(rng, base_price, self.variance);
        let shifted = if is_better {
            drawn + offset
        } else {
            drawn - offset
        };
        let price = round_to_hundred(shifted).max(self.min_price);

        let mut derived = specs.clone();
        derived.model = model_label(index);
        derived.release_year = specs
            .release_year
            .saturating_add(i32::from(rng.gen_bool(0.5)));
        derived.condition = Condition::New;

        if let Some(ram) = specs.ram {
            derived.ram = Some(if is_better {
                ram.saturating_add(pick(&c.ram_boost_choices, rng))
            } else {
                ram.saturating_sub(pick(&c.ram_cut_choices, rng))
                    .max(c.ram_floor_gb)
            });
        }

        if let Some(storage) = specs.storage {
            derived.storage = Some(if is_better {
                storage.saturating_mul(c.storage_multiplier)
            } else {
                storage.div_ceil(pick(&c.storage_divisors, rng).max(1))
            });
        }

        if let Some(processor) = &specs.processor {
            let suffix = if is_better { "Plus" } else { "Lite" };
            derived.processor = Some(format!("{} {}", processor, suffix));
        }

        let (pros_pool, cons_pool, score_range) = if is_better {
            (&c.better_pros, &c.better_cons, c.better_score)
        } else {
            (&c.worse_pros, &c.worse_cons, c.worse_score)
        };
        let pros = sample(pros_pool, random_in_range(rng, c.pros_count) as usize, rng);
        let cons = sample(cons_pool, random_in_range(rng, c.cons_count) as usize, rng);
        let recommendation_score = random_in_range(rng, score_range).min(100) as u8;

        tracing::trace!(
            model = %derived.model,
            is_better,
            price,
            recommendation_score,
            "synthesized comparable device"
        );

        ComparisonResult {
            device_name: derived.model.clone(),
            brand: derived.brand.clone(),
            specs: derived,
            price,
            pros,
            cons,
            recommendation_score,
        }
    }
}

/// `"Model A"`, `"Model B"`, ... wrapping to `"Model A2"` after Z.
pub fn model_label(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    match index / 26 {
        0 => format!("Model {}", letter),
        round => format!("Model {}{}", letter, round + 1),
    }
}

fn pick<R: Rng + ?Sized>(choices: &[u32], rng: &mut R) -> u32 {
    choices.choose(rng).copied().unwrap_or(0)
}

/// Up to `count` distinct entries of `pool`.
fn sample<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    pool.choose_multiple(rng, count.min(pool.len()))
        .cloned()
        .collect()
}
