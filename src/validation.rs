//! Structural self-check over generated price days
//!
//! Confirms the series shape and the fixed sell ratio, and reports how the
//! buy prices sit against their derived envelope. The envelope is observed,
//! not enforced, so breaching it is only a warning.

use tracing::{error, info, warn};

use crate::config::GeneratorConfig;
use crate::generator::{fluctuation_curve, DailyPrices, PriceGenerator};
use crate::types::{BUY_PRICE_ENVELOPE, HOURS_PER_DAY, SELL_RATIO};

const RATIO_TOLERANCE: f64 = 1e-9;
const CURVE_TOLERANCE: f64 = 1e-12;

/// Outcome of a self-check run. `passed` only drops on a failed critical check.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub passed: bool,
    pub checks: Vec<ValidationCheck>,
}

/// One named observation about generated prices
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub level: ValidationLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Critical,  // A price invariant is broken
    Warning,   // Outside the derived envelope
    Info,
}

impl ValidationCheck {
    fn icon(&self) -> &'static str {
        match (self.passed, &self.level) {
            (true, _) => "✅",
            (false, ValidationLevel::Critical) => "❌",
            (false, ValidationLevel::Warning) => "⚠️",
            (false, ValidationLevel::Info) => "ℹ️",
        }
    }

    fn failed_at(&self, level: ValidationLevel) -> bool {
        !self.passed && self.level == level
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            passed: true,
            checks: Vec::new(),
        }
    }

    pub fn add_check(&mut self, check: ValidationCheck) {
        if check.failed_at(ValidationLevel::Critical) {
            self.passed = false;
        }
        self.checks.push(check);
    }

    pub fn critical_failures(&self) -> Vec<&ValidationCheck> {
        self.checks.iter().filter(|c| c.failed_at(ValidationLevel::Critical)).collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationCheck> {
        self.checks.iter().filter(|c| c.failed_at(ValidationLevel::Warning)).collect()
    }

    /// Log every check, then the verdict. Failures go out at error/warn level.
    pub fn display(&self) {
        info!("🔍 Price self-check: {} check(s)", self.checks.len());
        for check in &self.checks {
            info!("{} {} - {}", check.icon(), check.name, check.message);
        }

        let failures = self.critical_failures();
        if !failures.is_empty() {
            error!("❌ {} invariant(s) broken", failures.len());
            for failure in failures {
                error!("   • {}: {}", failure.name, failure.message);
            }
            return;
        }

        let warnings = self.warnings();
        if !warnings.is_empty() {
            warn!("⚠️  {} day(s) left the €{:.1} - €{:.1} envelope", warnings.len(), BUY_PRICE_ENVELOPE.0, BUY_PRICE_ENVELOPE.1);
        }
        info!("✅ Prices hold their invariants");
    }
}

/// Runs the self-check over one or more generated days
pub struct PriceValidator;

impl PriceValidator {
    /// Check a single day
    pub fn validate_day(prices: &DailyPrices) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.add_check(Self::check_length(prices));
        result.add_check(Self::check_sell_ratio(prices));
        result.add_check(Self::check_buy_envelope(prices));
        result
    }

    /// Generate `days` consecutive seeds starting at `first_seed` and check each.
    /// Failing checks are kept per day; passing ones are folded into a summary.
    pub fn validate_days(days: usize, first_seed: u64, blue_parity: bool) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.add_check(Self::check_curve_endpoints());

        let mut clean_days = 0;
        for offset in 0..days as u64 {
            let seed = first_seed.wrapping_add(offset);
            let generator = PriceGenerator::new(GeneratorConfig {
                seed: Some(seed),
                blue_parity,
            });
            let day = Self::validate_day(&generator.generate());

            if day.checks.iter().all(|c| c.passed) {
                clean_days += 1;
                continue;
            }
            for mut check in day.checks.into_iter().filter(|c| !c.passed) {
                check.name = format!("{} (seed {})", check.name, seed);
                result.add_check(check);
            }
        }

        result.add_check(ValidationCheck {
            name: "Days".to_string(),
            passed: clean_days == days,
            message: format!("{}/{} days passed every check", clean_days, days),
            level: ValidationLevel::Info,
        });
        result
    }

    // Individual check methods

    fn check_length(prices: &DailyPrices) -> ValidationCheck {
        let passed = prices.buy.len() == HOURS_PER_DAY && prices.sell.len() == HOURS_PER_DAY;
        ValidationCheck {
            name: "Series Length".to_string(),
            passed,
            message: format!("buy={} sell={} (expected {})", prices.buy.len(), prices.sell.len(), HOURS_PER_DAY),
            level: ValidationLevel::Critical,
        }
    }

    fn check_sell_ratio(prices: &DailyPrices) -> ValidationCheck {
        let worst = prices
            .hours()
            .map(|(_, buy, sell)| ((sell - buy * SELL_RATIO) / buy).abs())
            .fold(0.0_f64, f64::max);

        ValidationCheck {
            name: "Sell Ratio".to_string(),
            passed: worst <= RATIO_TOLERANCE,
            message: format!("max relative deviation from {:.1}×buy: {:.2e}", SELL_RATIO, worst),
            level: ValidationLevel::Critical,
        }
    }

    fn check_buy_envelope(prices: &DailyPrices) -> ValidationCheck {
        let (low, high) = BUY_PRICE_ENVELOPE;
        let outside: Vec<usize> = prices
            .hours()
            .filter(|&(_, buy, _)| buy < low || buy > high)
            .map(|(hour, _, _)| hour)
            .collect();

        if outside.is_empty() {
            ValidationCheck {
                name: "Buy Envelope".to_string(),
                passed: true,
                message: format!("all hours within €{:.1} - €{:.1}", low, high),
                level: ValidationLevel::Info,
            }
        } else {
            ValidationCheck {
                name: "Buy Envelope".to_string(),
                passed: false,
                message: format!("hours {:?} outside €{:.1} - €{:.1}", outside, low, high),
                level: ValidationLevel::Warning,
            }
        }
    }

    fn check_curve_endpoints() -> ValidationCheck {
        let curve = fluctuation_curve();
        let first = curve[0];
        let last = curve[HOURS_PER_DAY - 1];
        ValidationCheck {
            name: "Daily Cycle".to_string(),
            passed: first.abs() < CURVE_TOLERANCE && last.abs() < CURVE_TOLERANCE,
            message: format!("starts at {:.1e}, ends at {:.1e}", first, last),
            level: ValidationLevel::Info,
        }
    }
}
