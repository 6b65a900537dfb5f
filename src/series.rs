//! Typed, validated inputs for the engines.
//!
//! Raw request data is checked exactly once here. A `NumericSeries` or
//! `SmoothingFactor` that exists is valid for its whole lifetime, so the
//! engines in [`crate::algo`] never re-check.

use crate::error::InvalidInput;

/// Ordered, non-empty sequence of finite observations in time order.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSeries(Vec<f64>);

impl NumericSeries {
    pub fn new(values: Vec<f64>) -> Result<Self, InvalidInput> {
        if values.is_empty() {
            return Err(InvalidInput::EmptySeries);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidInput::NonFiniteValue { index, value });
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn first(&self) -> f64 {
        // Non-empty by construction.
        self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// EWMA weight on the newest observation, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    pub fn new(alpha: f64) -> Result<Self, InvalidInput> {
        if !alpha.is_finite() {
            return Err(InvalidInput::NonFiniteAlpha(alpha));
        }
        if alpha <= 0.0 || alpha > 1.0 {
            return Err(InvalidInput::AlphaOutOfRange(alpha));
        }
        Ok(Self(alpha))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Validate a raw series and, when supplied, a raw smoothing factor.
///
/// Order and length of `raw_values` are preserved. The series is checked
/// before alpha, so an empty series with a bad alpha reports the series.
pub fn validate(
    raw_values: &[f64],
    raw_alpha: Option<f64>,
) -> Result<(NumericSeries, Option<SmoothingFactor>), InvalidInput> {
    let series = NumericSeries::new(raw_values.to_vec())?;
    let alpha = raw_alpha.map(SmoothingFactor::new).transpose()?;
    Ok((series, alpha))
}
