use outlook_core::TechnicalSignal;

use crate::indicators::{rsi, sma};

/// Below this many closes no indicator is worth reporting.
const MIN_CLOSES: usize = 20;
const RSI_PERIOD: usize = 14;
const SHORT_SMA: usize = 20;
const LONG_SMA: usize = 50;

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;

pub struct TechnicalAnalysisEngine;

impl TechnicalAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Momentum/trend signal from an ascending series of closes.
    pub fn analyze(&self, closes: &[f64]) -> TechnicalSignal {
        if closes.len() < MIN_CLOSES {
            return TechnicalSignal {
                note: "Not enough data".to_string(),
                rsi: None,
            };
        }

        let rsi_value = rsi(closes, RSI_PERIOD);
        let mut flags: Vec<&str> = Vec::new();

        if let Some(r) = rsi_value {
            if r >= RSI_OVERBOUGHT {
                flags.push("RSI overbought");
            } else if r <= RSI_OVERSOLD {
                flags.push("RSI oversold");
            }
        }

        // The 20/50 cross is reported only when both averages exist; a
        // series too short for the 50 gets no tilt flag at all.
        if let (Some(short), Some(long)) = (sma(closes, SHORT_SMA), sma(closes, LONG_SMA)) {
            flags.push(if short > long {
                "bullish tilt"
            } else {
                "bearish tilt"
            });
        }

        let note = if flags.is_empty() {
            "Neutral".to_string()
        } else {
            flags.join(", ")
        };

        TechnicalSignal {
            note,
            rsi: rsi_value,
        }
    }
}

impl Default for TechnicalAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
