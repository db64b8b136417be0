use outlook_core::{Quote, RiskSignal};

/// Absolute percent move that counts as a high intraday move.
const HIGH_MOVE_PCT: f64 = 4.0;
/// Day range wider than this fraction of the current price gets flagged.
const WIDE_RANGE_RATIO: f64 = 0.06;

pub struct RiskAnalysisEngine;

impl RiskAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Intraday-volatility signal from a single quote. Absent prices
    /// count as zero.
    pub fn analyze(&self, quote: &Quote) -> RiskSignal {
        let current = quote.current.unwrap_or(0.0);
        let prev_close = quote.prev_close.unwrap_or(0.0);
        let high = quote.high.unwrap_or(0.0);
        let low = quote.low.unwrap_or(0.0);

        // A missing or zero previous close falls back to a divisor of 1,
        // so pct_change then tracks the raw price difference.
        let divisor = if prev_close != 0.0 { prev_close } else { 1.0 };
        let pct_change = (current - prev_close) / divisor * 100.0;

        let mut flags: Vec<&str> = Vec::new();
        if pct_change.abs() > HIGH_MOVE_PCT {
            flags.push("High intraday move");
        }
        if high - low > current * WIDE_RANGE_RATIO {
            flags.push("Wide day range");
        }

        let note = if flags.is_empty() {
            "Normal".to_string()
        } else {
            flags.join(", ")
        };

        RiskSignal { note, pct_change }
    }
}

impl Default for RiskAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(current: f64, prev_close: f64, high: f64, low: f64) -> Quote {
        Quote {
            current: Some(current),
            prev_close: Some(prev_close),
            high: Some(high),
            low: Some(low),
            open: None,
        }
    }

    #[test]
    fn sharp_move_with_wide_range_fires_both_flags() {
        let signal = RiskAnalysisEngine::new().analyze(&quote(110.0, 100.0, 115.0, 95.0));
        assert!((signal.pct_change - 10.0).abs() < 1e-9);
        // Range 20 exceeds 110 * 0.06 = 6.6.
        assert_eq!(signal.note, "High intraday move, Wide day range");
    }

    #[test]
    fn calm_day_reads_normal() {
        let signal = RiskAnalysisEngine::new().analyze(&quote(100.0, 99.0, 101.0, 98.5));
        assert_eq!(signal.note, "Normal");
        assert!((signal.pct_change - 100.0 / 99.0).abs() < 1e-9);
    }

    #[test]
    fn missing_previous_close_divides_by_one() {
        let signal = RiskAnalysisEngine::new().analyze(&Quote {
            current: Some(50.0),
            ..Quote::default()
        });
        assert!((signal.pct_change - 5000.0).abs() < 1e-9);
        assert!(signal.note.contains("High intraday move"));
    }

    #[test]
    fn empty_quote_reads_normal() {
        let signal = RiskAnalysisEngine::new().analyze(&Quote::default());
        assert_eq!(signal.pct_change, 0.0);
        assert_eq!(signal.note, "Normal");
    }
}
