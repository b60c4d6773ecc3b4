// Common types and fixed market parameters used across the application

use std::ops::Range;

/// Hours in one simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// One value per hour of the simulated day.
pub type HourlySeries = [f64; HOURS_PER_DAY];

// Base price ranges (€/kg)
pub const GREEN_H2_PRICE_RANGE: Range<f64> = 4.0..8.0;
pub const BLUE_H2_PRICE_RANGE: Range<f64> = 2.0..4.0;

/// Peak offset of the daily sine term.
pub const FLUCTUATION_AMPLITUDE: f64 = 0.5;

/// Selling price as a fraction of the buying price.
pub const SELL_RATIO: f64 = 0.6;

/// Derived envelope for buy prices: green range widened by the fluctuation amplitude.
/// Not enforced anywhere.
pub const BUY_PRICE_ENVELOPE: (f64, f64) = (3.5, 8.5);

// Output labels
pub const BUY_LABEL: &str = "c_hBuy";
pub const SELL_LABEL: &str = "c_hSell";
