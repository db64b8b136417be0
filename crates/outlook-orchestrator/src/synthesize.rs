use outlook_core::{ConsensusReport, RiskSignal, SentimentSummary, TechnicalSignal, Tone};

/// RSI below this adds a contrarian point to the score.
const RSI_SUPPORT: f64 = 35.0;
/// RSI above this subtracts one.
const RSI_STRETCH: f64 = 65.0;

/// Merge the three signal sources into one scored verdict.
///
/// Pure and deterministic: the same inputs always produce the same
/// output.
pub fn synthesize(
    symbol: &str,
    sentiment: &SentimentSummary,
    technical: &TechnicalSignal,
    risk: &RiskSignal,
) -> ConsensusReport {
    let mut score = i64::from(sentiment.positive) - i64::from(sentiment.negative);

    if let Some(rsi) = technical.rsi {
        if rsi < RSI_SUPPORT {
            score += 1;
        }
        if rsi > RSI_STRETCH {
            score -= 1;
        }
    }

    if risk.note.contains("High intraday move") {
        score -= 1;
    }

    let tone = match score {
        s if s > 0 => Tone::SlightlyPositive,
        0 => Tone::Neutral,
        _ => Tone::Cautious,
    };

    ConsensusReport {
        symbol: symbol.to_string(),
        tone,
        highlights: [technical.note.clone(), risk.note.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(positive: u32, neutral: u32, negative: u32) -> SentimentSummary {
        SentimentSummary {
            positive,
            neutral,
            negative,
        }
    }

    fn technical(note: &str, rsi: Option<f64>) -> TechnicalSignal {
        TechnicalSignal {
            note: note.to_string(),
            rsi,
        }
    }

    fn risk(note: &str) -> RiskSignal {
        RiskSignal {
            note: note.to_string(),
            pct_change: 0.0,
        }
    }

    #[test]
    fn oversold_with_positive_news_reads_slightly_positive() {
        let report = synthesize(
            "AAPL",
            &sentiment(3, 0, 1),
            &technical("RSI oversold", Some(30.0)),
            &risk("Normal"),
        );
        // (3 - 1) + 1 for the low RSI = 3.
        assert_eq!(report.tone, Tone::SlightlyPositive);
    }

    #[test]
    fn stretched_rsi_and_volatility_read_cautious() {
        let report = synthesize(
            "TSLA",
            &sentiment(0, 0, 2),
            &technical("RSI overbought", Some(80.0)),
            &risk("High intraday move, Wide day range"),
        );
        // -2 - 1 - 1 = -4.
        assert_eq!(report.tone, Tone::Cautious);
    }

    #[test]
    fn zero_score_reads_neutral() {
        let report = synthesize(
            "MSFT",
            &sentiment(0, 5, 0),
            &technical("Neutral", Some(50.0)),
            &risk("Normal"),
        );
        assert_eq!(report.tone, Tone::Neutral);
    }

    #[test]
    fn missing_rsi_contributes_nothing() {
        let report = synthesize(
            "IPOX",
            &sentiment(1, 0, 0),
            &technical("Not enough data", None),
            &risk("Normal"),
        );
        assert_eq!(report.tone, Tone::SlightlyPositive);
    }

    #[test]
    fn highlights_keep_technical_then_risk_order() {
        let report = synthesize(
            "AAPL",
            &sentiment(0, 0, 0),
            &technical("bullish tilt", Some(55.0)),
            &risk("Wide day range"),
        );
        assert_eq!(report.highlights[0], "bullish tilt");
        assert_eq!(report.highlights[1], "Wide day range");
        assert_eq!(report.symbol, "AAPL");
    }

    #[test]
    fn same_inputs_same_output() {
        let s = sentiment(2, 1, 1);
        let t = technical("Neutral", Some(40.0));
        let r = risk("Normal");
        let a = synthesize("NVDA", &s, &t, &r);
        let b = synthesize("NVDA", &s, &t, &r);
        assert_eq!(a.tone, b.tone);
        assert_eq!(a.highlights, b.highlights);
    }
}
