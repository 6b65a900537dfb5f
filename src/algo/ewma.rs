use crate::series::{NumericSeries, SmoothingFactor};

/// Incremental EWMA. Holds only the previous output.
///
/// The first sample seeds the average directly instead of blending against
/// zero, so short series carry no startup bias.
#[derive(Clone, Debug)]
pub struct Ewma {
    alpha: f64,
    value: f64,
    initialized: bool,
}

impl Ewma {
    pub fn new(alpha: SmoothingFactor) -> Self {
        Self {
            alpha: alpha.get(),
            value: 0.0,
            initialized: false,
        }
    }

    pub fn update(&mut self, sample: f64) -> f64 {
        if !self.initialized {
            self.value = sample;
            self.initialized = true;
        } else {
            let blended = self.alpha * sample + (1.0 - self.alpha) * self.value;
            // Rounding can step just outside the hull of the two inputs.
            self.value = blended.clamp(sample.min(self.value), sample.max(self.value));
        }
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// EWMA of every prefix of `series`, in one forward pass.
///
/// `y[0] = x[0]`, then `y[i] = alpha * x[i] + (1 - alpha) * y[i-1]`.
pub fn compute_ewma(series: &NumericSeries, alpha: SmoothingFactor) -> Vec<f64> {
    let mut ewma = Ewma::new(alpha);
    series.values().iter().map(|&x| ewma.update(x)).collect()
}
