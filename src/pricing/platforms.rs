use super::random::{perturb, random_in_range};
use crate::config::PlatformConfig;
use crate::models::PlatformPrice;
use rand::Rng;

/// Synthesizes per-retailer offers around a headline price.
pub struct PlatformPriceGenerator<'a> {
    config: &'a PlatformConfig,
    variance: f64,
}

impl<'a> PlatformPriceGenerator<'a> {
    pub fn new(config: &'a PlatformConfig, variance: f64) -> Self {
        Self { config, variance }
    }

    /// Take a random-size front slice of the roster and price each entry
    /// independently. Names are distinct because the roster is never
    /// resampled.
    pub fn generate<R: Rng + ?Sized>(&self, headline_price: f64, rng: &mut R) -> Vec<PlatformPrice> {
        let count = (random_in_range(rng, self.config.count) as usize).min(self.config.roster.len());

        let mut prices = Vec::with_capacity(count);
        for platform in self.config.roster.iter().take(count) {
            let price = perturb(rng, headline_price, self.variance);
            let in_stock = rng.gen_bool(self.config.in_stock_probability);
            prices.push(PlatformPrice {
                platform: platform.name.clone(),
                price,
                url: platform.url.clone(),
                in_stock,
            });
        }
        prices
    }
}
