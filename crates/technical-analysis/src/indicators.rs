/// Simple moving average of the trailing `period` values
pub fn sma(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    Some(data[data.len() - period..].iter().sum::<f64>() / period as f64)
}

/// Exponential moving average across a whole slice with smoothing
/// constant k = 2/(period+1).
///
/// Seeded from the slice's first value, not an initial SMA; downstream
/// scoring depends on this exact smoothing.
pub fn ema(data: &[f64], period: usize) -> Option<f64> {
    let (&first, rest) = data.split_first()?;
    let k = 2.0 / (period as f64 + 1.0);
    Some(rest.iter().fold(first, |v, &x| x * k + v * (1.0 - k)))
}

/// Relative Strength Index over the trailing `period` deltas.
///
/// Gains and losses are smoothed independently over their last `period`
/// entries. Returns None with fewer than `period` deltas; 100 when no
/// losses occurred at all.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    let mut gains = Vec::with_capacity(closes.len().saturating_sub(1));
    let mut losses = Vec::with_capacity(closes.len().saturating_sub(1));

    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    if period == 0 || gains.len() < period {
        return None;
    }

    let avg_gain = ema(&gains[gains.len() - period..], period)?;
    let avg_loss = ema(&losses[losses.len() - period..], period)?;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
