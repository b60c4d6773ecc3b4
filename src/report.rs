// Output rendering for generated price days

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::PriceResult;
use crate::generator::DailyPrices;
use crate::types::{HourlySeries, BUY_LABEL, HOURS_PER_DAY, SELL_LABEL};

/// Min/max/mean of one hourly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub min: f64,
    pub min_hour: usize,
    pub max: f64,
    pub max_hour: usize,
    pub mean: f64,
}

impl SeriesSummary {
    pub fn of(series: &HourlySeries) -> Self {
        let mut summary = Self {
            min: series[0],
            min_hour: 0,
            max: series[0],
            max_hour: 0,
            mean: 0.0,
        };

        for (hour, &value) in series.iter().enumerate().skip(1) {
            if value < summary.min {
                summary.min = value;
                summary.min_hour = hour;
            }
            if value > summary.max {
                summary.max = value;
                summary.max_hour = hour;
            }
        }
        summary.mean = series.iter().sum::<f64>() / HOURS_PER_DAY as f64;
        summary
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HourEntry {
    pub hour: usize,
    pub buy: f64,
    pub sell: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub buy: SeriesSummary,
    pub sell: SeriesSummary,
}

/// Machine-readable view of one generated day.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub hours: Vec<HourEntry>,
    pub buy: HourlySeries,
    pub sell: HourlySeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DaySummary>,
}

impl PriceReport {
    pub fn new(prices: &DailyPrices, date: NaiveDate, seed: Option<u64>, with_summary: bool) -> Self {
        Self {
            date,
            seed,
            hours: prices
                .hours()
                .map(|(hour, buy, sell)| HourEntry { hour, buy, sell })
                .collect(),
            buy: prices.buy,
            sell: prices.sell,
            summary: with_summary.then(|| DaySummary {
                buy: SeriesSummary::of(&prices.buy),
                sell: SeriesSummary::of(&prices.sell),
            }),
        }
    }
}

fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

/// `[v0 v1 ... v23]`
pub fn format_series(series: &HourlySeries, precision: Option<usize>) -> String {
    let values: Vec<String> = series.iter().map(|&v| format_value(v, precision)).collect();
    format!("[{}]", values.join(" "))
}

/// The two labeled lines, buy then sell.
pub fn render_text(prices: &DailyPrices, precision: Option<usize>) -> String {
    format!(
        "{}: {}\n{}: {}\n",
        BUY_LABEL,
        format_series(&prices.buy, precision),
        SELL_LABEL,
        format_series(&prices.sell, precision)
    )
}

fn render_summary_line(label: &str, summary: &SeriesSummary) -> String {
    format!(
        "{} min {:.4} @ {:02}h | max {:.4} @ {:02}h | mean {:.4}\n",
        label, summary.min, summary.min_hour, summary.max, summary.max_hour, summary.mean
    )
}

/// Render a day according to the output settings.
pub fn render(
    prices: &DailyPrices,
    output: &OutputConfig,
    date: NaiveDate,
    seed: Option<u64>,
) -> PriceResult<String> {
    match output.format {
        OutputFormat::Text => {
            let mut text = render_text(prices, output.precision);
            if output.summary {
                text.push_str(&render_summary_line(BUY_LABEL, &SeriesSummary::of(&prices.buy)));
                text.push_str(&render_summary_line(SELL_LABEL, &SeriesSummary::of(&prices.sell)));
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let report = PriceReport::new(prices, date, seed, output.summary);
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_day(base: f64) -> DailyPrices {
        DailyPrices::from_base(&[base; HOURS_PER_DAY])
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_text_has_two_labeled_lines() {
        let text = render_text(&flat_day(6.0), Some(2));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("c_hBuy: [6.00 "));
        assert!(lines[1].starts_with("c_hSell: [3.60 "));
        assert!(lines[0].ends_with(']'));
    }

    #[test]
    fn test_series_has_24_values() {
        let formatted = format_series(&[1.5; HOURS_PER_DAY], None);
        let inner = formatted.trim_start_matches('[').trim_end_matches(']');
        assert_eq!(inner.split(' ').count(), HOURS_PER_DAY);
        assert!(inner.split(' ').all(|v| v == "1.5"));
    }

    #[test]
    fn test_summary_locates_extremes() {
        let summary = SeriesSummary::of(&flat_day(6.0).buy);
        assert_eq!(summary.max_hour, 6);
        assert_eq!(summary.min_hour, 17);
        assert!((summary.mean - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_summary_appended() {
        let output = OutputConfig {
            format: OutputFormat::Text,
            precision: Some(3),
            summary: true,
        };
        let text = render(&flat_day(5.0), &output, date(), None).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("c_hBuy min"));
        assert!(lines[3].starts_with("c_hSell min"));
    }

    #[test]
    fn test_json_report_shape() {
        let output = OutputConfig {
            format: OutputFormat::Json,
            precision: None,
            summary: false,
        };
        let json = render(&flat_day(6.0), &output, date(), Some(42)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["seed"], 42);
        assert_eq!(value["hours"].as_array().unwrap().len(), HOURS_PER_DAY);
        assert_eq!(value["buy"].as_array().unwrap().len(), HOURS_PER_DAY);
        assert_eq!(value["hours"][0]["buy"], 6.0);
        assert!(value.get("summary").is_none());
    }

    #[test]
    fn test_json_omits_missing_seed() {
        let report = PriceReport::new(&flat_day(6.0), date(), None, true);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("seed").is_none());
        assert!(value["summary"]["sell"]["mean"].is_number());
    }
}
