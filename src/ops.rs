//! The two request/response operations: validate, compute, format.
//!
//! Both are pure and synchronous, and safe to call concurrently.

use crate::algo::{compute_average, compute_ewma};
use crate::error::InvalidInput;
use crate::response::{ComputationResult, ResponseBody, format};
use crate::series::validate;

pub fn compute_average_operation(values: &[f64]) -> Result<ResponseBody, InvalidInput> {
    let (series, _) = validate(values, None)?;
    let result = ComputationResult::Average {
        mean: compute_average(&series),
        count: series.len(),
    };
    Ok(format(result))
}

/// `alpha` is optional on the wire, but required here.
pub fn compute_ewma_operation(
    values: &[f64],
    alpha: Option<f64>,
) -> Result<ResponseBody, InvalidInput> {
    let (series, alpha) = validate(values, alpha)?;
    let alpha = alpha.ok_or(InvalidInput::MissingAlpha)?;
    let result = ComputationResult::Ewma {
        series: compute_ewma(&series, alpha),
        alpha: alpha.get(),
    };
    Ok(format(result))
}
