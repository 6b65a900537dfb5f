use crate::series::NumericSeries;

/// Arithmetic mean of a validated series.
pub fn compute_average(series: &NumericSeries) -> f64 {
    let values = series.values();
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return sum / n;
    }

    // The sum overflowed; a running mean stays within the input range.
    values
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, &x)| {
            let k = (i + 1) as f64;
            mean * (i as f64 / k) + x / k
        })
}
