//! Shared statistics helpers.
//!
//! Small numeric utilities used by the feature extractors and the quality
//! profile. All functions are total: empty inputs yield `0.0` rather than
//! `NaN`.

use std::collections::HashMap;

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns `0.0` when fewer than two values are given.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Median; the mean of the two middle values for an even count.
///
/// Returns `0.0` for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64) * 100.0
}

/// `part / whole`, or `0.0` when `whole` is zero.
pub fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Convert counts to `f64` for the floating-point helpers above.
pub fn as_f64(counts: &[usize]) -> Vec<f64> {
    counts.iter().map(|&c| c as f64).collect()
}

/// Pick the first band whose limit the value exceeds (`value > limit`).
///
/// Bands must be ordered from the highest limit down. Falls back to
/// `otherwise` when no band matches.
pub fn band_above<T: Copy>(value: f64, bands: &[(f64, f64, T)], otherwise: (f64, T)) -> (f64, T) {
    bands
        .iter()
        .find(|(limit, _, _)| value > *limit)
        .map_or(otherwise, |&(_, score, tag)| (score, tag))
}

/// Pick the first band whose limit the value falls under (`value < limit`).
///
/// Bands must be ordered from the lowest limit up. Falls back to
/// `otherwise` when no band matches.
pub fn band_below<T: Copy>(value: f64, bands: &[(f64, f64, T)], otherwise: (f64, T)) -> (f64, T) {
    bands
        .iter()
        .find(|(limit, _, _)| value < *limit)
        .map_or(otherwise, |&(_, score, tag)| (score, tag))
}

/// Count items and return the `n` most frequent.
///
/// Sorted by count descending; ties keep first-appearance order.
pub fn most_common<'a, I>(items: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|item| (item.to_string(), counts[item]))
        .collect();
    // Stable sort keeps first-appearance order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
