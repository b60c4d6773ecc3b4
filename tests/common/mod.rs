// Common test utilities and helpers

use h2_price_gen::{Config, DailyPrices, GeneratorConfig, PriceGenerator};
use tempfile::TempDir;
use std::path::PathBuf;

/// Create a test configuration with a fixed seed
#[allow(dead_code)]
pub fn create_test_config(seed: u64) -> Config {
    let mut config = Config::default();
    config.generator.seed = Some(seed);
    config.output.precision = Some(4);
    config.logging.level = "warn".to_string();
    config
}

/// Generate one day from a fixed seed
#[allow(dead_code)]
pub fn generate_seeded(seed: u64) -> DailyPrices {
    PriceGenerator::new(GeneratorConfig {
        seed: Some(seed),
        blue_parity: false,
    })
    .generate()
}

/// Create a temporary directory and a config path inside it
#[allow(dead_code)]
pub fn create_temp_config_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("h2-prices.toml");
    (temp_dir, config_path)
}
