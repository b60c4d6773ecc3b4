// Hydrogen Price Generator Library
//
// Synthesizes one simulated day of hourly hydrogen buy and sell prices

pub mod types;
pub mod config;
pub mod error;       // Unified error handling
pub mod generator;
pub mod report;      // Text and JSON rendering
pub mod validation;  // Structural self-check

// Re-export core types
pub use types::{HourlySeries, HOURS_PER_DAY};

// Re-export generator
pub use generator::{fluctuation_curve, sample_hourly, DailyPrices, PriceGenerator};

// Re-export error types
pub use error::{PriceError, PriceResult};

// Re-export configuration
pub use config::{Config, ConfigError, GeneratorConfig, LoggingConfig, OutputConfig, OutputFormat};

// Re-export reporting
pub use report::{render, render_text, PriceReport, SeriesSummary};

// Re-export validation types
pub use validation::{PriceValidator, ValidationCheck, ValidationLevel, ValidationResult};
