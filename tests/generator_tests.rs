// Integration tests for hourly price generation

mod common;

use common::generate_seeded;
use h2_price_gen::types::{BUY_PRICE_ENVELOPE, SELL_RATIO};
use h2_price_gen::{fluctuation_curve, DailyPrices, GeneratorConfig, PriceGenerator, HOURS_PER_DAY};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_unseeded_day_has_full_series() {
    let prices = PriceGenerator::new(GeneratorConfig::default()).generate();

    assert_eq!(prices.buy.len(), HOURS_PER_DAY);
    assert_eq!(prices.sell.len(), HOURS_PER_DAY);
}

#[test]
fn test_sell_tracks_buy_within_tolerance() {
    for seed in 0..20 {
        let prices = generate_seeded(seed);
        for (hour, buy, sell) in prices.hours() {
            let expected = SELL_RATIO * buy;
            assert!(
                ((sell - expected) / expected).abs() < 1e-9,
                "seed {} hour {}: {} vs {}",
                seed, hour, sell, expected
            );
        }
    }
}

#[test]
fn test_buy_prices_stay_in_envelope() {
    let (low, high) = BUY_PRICE_ENVELOPE;
    for seed in 0..500 {
        let prices = generate_seeded(seed);
        for (hour, buy, _) in prices.hours() {
            assert!(buy >= low && buy <= high, "seed {} hour {}: {}", seed, hour, buy);
        }
    }
}

#[test]
fn test_buy_minus_curve_is_green_range() {
    let curve = fluctuation_curve();
    for seed in 0..100 {
        let prices = generate_seeded(seed);
        for h in 0..HOURS_PER_DAY {
            let base = prices.buy[h] - curve[h];
            assert!(base >= 4.0 - 1e-9 && base < 8.0 + 1e-9, "seed {} hour {}: {}", seed, h, base);
        }
    }
}

#[test]
fn test_same_seed_same_day() {
    assert_eq!(generate_seeded(2024), generate_seeded(2024));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(generate_seeded(1), generate_seeded(2));
}

#[test]
fn test_explicit_rng_matches_seeded_generate() {
    let generator = PriceGenerator::new(GeneratorConfig {
        seed: Some(77),
        blue_parity: false,
    });
    let mut rng = StdRng::seed_from_u64(77);

    assert_eq!(generator.generate(), generator.generate_with(&mut rng));
}

#[test]
fn test_known_base_day() {
    let mut base = [5.0; HOURS_PER_DAY];
    base[0] = 6.0;
    let prices = DailyPrices::from_base(&base);

    assert_eq!(prices.buy[0], 6.0);
    assert!((prices.sell[0] - 3.6).abs() < 1e-12);
    // Hour 23 closes the cycle back at the base price
    assert!((prices.buy[23] - 5.0).abs() < 1e-12);
}

#[test]
fn test_daily_prices_json_roundtrip_many_seeds() {
    for seed in 0..50 {
        let prices = generate_seeded(seed);
        let json = serde_json::to_string(&prices).expect("Failed to serialize prices");
        let restored: DailyPrices = serde_json::from_str(&json).expect("Failed to deserialize prices");
        assert_eq!(restored, prices, "seed {}", seed);
    }
}

#[test]
fn test_daily_prices_json_roundtrip() {
    let prices = generate_seeded(5);
    let json = serde_json::to_string(&prices).expect("Failed to serialize prices");
    let restored: DailyPrices = serde_json::from_str(&json).expect("Failed to deserialize prices");

    // Bit-exact, not merely close
    assert_eq!(restored, prices);
    for (h, (a, b)) in restored.buy.iter().zip(prices.buy.iter()).enumerate() {
        assert_eq!(a.to_bits(), b.to_bits(), "hour {}", h);
    }
}
