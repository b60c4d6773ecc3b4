// Hydrogen price generator CLI
// Prints one simulated day of hourly buy/sell prices

use std::io::Write;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};

use h2_price_gen::{
    render, Config, OutputFormat, PriceError, PriceGenerator, PriceResult, PriceValidator,
};

const DEFAULT_CONFIG_PATH: &str = "h2-prices.toml";

#[derive(Parser)]
#[command(name = "h2-prices")]
#[command(version)]
#[command(about = "Synthetic hourly hydrogen buy/sell prices", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file path (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one day of prices (default)
    Generate(GenerateArgs),

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate many days and run the structural self-check
    Check {
        /// Number of days to generate
        #[arg(short, long, default_value = "100")]
        days: usize,

        /// Seed of the first day; later days use consecutive seeds
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Draw the blue parity series as well
        #[arg(long)]
        blue_parity: bool,
    },
}

#[derive(clap::Args, Default)]
struct GenerateArgs {
    /// Seed for a reproducible day
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places for text output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Append min/max/mean per series
    #[arg(long)]
    summary: bool,

    /// Also draw (and discard) the blue-hydrogen series
    #[arg(long)]
    blue_parity: bool,

    /// Day label for JSON output (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_or_error(path).map_err(PriceError::from),
        None => Ok(Config::default()),
    };

    // Setup logging before reporting config errors so they are visible
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        loaded
            .as_ref()
            .ok()
            .and_then(|config| config.log_level().ok())
            .unwrap_or(tracing::Level::INFO)
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    if let Some(path) = &cli.config {
        debug!("📁 Config: {}", path);
    }

    let outcome = match cli.command {
        None => generate(GenerateArgs::default(), config),
        Some(Commands::Generate(args)) => generate(args, config),
        Some(Commands::Init { path, force }) => init_config(&path, force),
        Some(Commands::Check { days, seed, blue_parity }) => {
            check_days(days, seed, blue_parity || config.generator.blue_parity)
        }
    };

    if let Err(e) = outcome {
        exit_with(e);
    }

    Ok(())
}

/// Log an error with its quick-fix hint and exit
fn exit_with(e: PriceError) -> ! {
    error!("❌ {} error", e.category());
    for line in e.user_message().lines() {
        error!("{}", line);
    }
    std::process::exit(1);
}

fn generate(args: GenerateArgs, mut config: Config) -> PriceResult<()> {
    // CLI flags override file values
    if args.seed.is_some() {
        config.generator.seed = args.seed;
    }
    if args.blue_parity {
        config.generator.blue_parity = true;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.precision.is_some() {
        config.output.precision = args.precision;
    }
    if args.summary {
        config.output.summary = true;
    }
    config.validate()?;

    let date = match args.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
        None => chrono::Local::now().date_naive(),
    };

    let seed = config.generator.seed;
    let generator = PriceGenerator::new(config.generator);
    let prices = generator.generate();
    debug!("⚡ Generated {} hourly prices for {}", prices.buy.len(), date);

    let rendered = render(&prices, &config.output, date, seed)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(rendered.as_bytes())?;
    handle.flush()?;

    Ok(())
}

fn init_config(path: &str, force: bool) -> PriceResult<()> {
    info!("🔧 Writing default configuration...");

    Config::write_default(path, force)?;

    info!("📝 Created {}", path);
    info!("💡 Next: h2-prices --config {} generate", path);
    Ok(())
}

fn check_days(days: usize, seed: u64, blue_parity: bool) -> PriceResult<()> {
    if days == 0 {
        return Err(PriceError::InvalidParameter(
            "days".to_string(),
            "must be greater than 0".to_string(),
        ));
    }

    info!("🧪 Checking {} day(s) from seed {}", days, seed);
    let result = PriceValidator::validate_days(days, seed, blue_parity);
    result.display();

    if !result.passed {
        std::process::exit(1);
    }
    Ok(())
}
