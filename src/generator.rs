//! Hourly hydrogen price generation
//!
//! Buy prices are a uniform green-hydrogen base draw per hour plus one full
//! sine cycle across the day. Sell prices are a fixed fraction of buy prices.

use std::f64::consts::PI;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::types::{
    HourlySeries, BLUE_H2_PRICE_RANGE, FLUCTUATION_AMPLITUDE, GREEN_H2_PRICE_RANGE,
    HOURS_PER_DAY, SELL_RATIO,
};

/// Buy and sell prices for one simulated day, index-aligned by hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrices {
    pub buy: HourlySeries,
    pub sell: HourlySeries,
}

impl DailyPrices {
    /// Build both series from a base price draw.
    pub fn from_base(base: &HourlySeries) -> Self {
        let curve = fluctuation_curve();
        let buy: HourlySeries = std::array::from_fn(|h| base[h] + curve[h]);
        let sell: HourlySeries = std::array::from_fn(|h| buy[h] * SELL_RATIO);
        Self { buy, sell }
    }

    /// Iterate `(hour, buy, sell)` triples in hour order.
    pub fn hours(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.buy
            .iter()
            .zip(self.sell.iter())
            .enumerate()
            .map(|(hour, (&buy, &sell))| (hour, buy, sell))
    }
}

/// Daily cycle: `0.5 * sin(2π·h/23)`, so hour 0 and hour 23 both sit at zero.
pub fn fluctuation_curve() -> HourlySeries {
    let last = (HOURS_PER_DAY - 1) as f64;
    std::array::from_fn(|h| (2.0 * PI * h as f64 / last).sin() * FLUCTUATION_AMPLITUDE)
}

/// Draw one independent uniform sample per hour.
pub fn sample_hourly<R: Rng + ?Sized>(rng: &mut R, range: Range<f64>) -> HourlySeries {
    std::array::from_fn(|_| rng.gen_range(range.clone()))
}

pub struct PriceGenerator {
    config: GeneratorConfig,
}

impl PriceGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate one day from the configured seed, or from OS entropy when unseeded.
    pub fn generate(&self) -> DailyPrices {
        let mut rng = match self.config.seed {
            Some(seed) => {
                debug!("🎲 Seeded price draw (seed={})", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("🎲 Unseeded price draw");
                StdRng::from_entropy()
            }
        };
        self.generate_with(&mut rng)
    }

    /// Generate one day drawing from the supplied random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> DailyPrices {
        let green = sample_hourly(rng, GREEN_H2_PRICE_RANGE);

        // Blue prices never reach the output; drawing them only keeps the
        // random stream aligned with the two-range generator.
        if self.config.blue_parity {
            let blue = sample_hourly(rng, BLUE_H2_PRICE_RANGE);
            let mean = blue.iter().sum::<f64>() / HOURS_PER_DAY as f64;
            debug!("🔵 Blue parity draw discarded (mean €{:.4}/kg)", mean);
        }

        DailyPrices::from_base(&green)
    }
}
