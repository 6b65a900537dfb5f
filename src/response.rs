//! Response bodies for the two computations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputationKind {
    Average,
    Ewma,
}

/// Engine output plus the inputs the response has to echo back.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationResult {
    Average { mean: f64, count: usize },
    Ewma { series: Vec<f64>, alpha: f64 },
}

impl ComputationResult {
    pub fn kind(&self) -> ComputationKind {
        match self {
            Self::Average { .. } => ComputationKind::Average,
            Self::Ewma { .. } => ComputationKind::Ewma,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageResponse {
    pub mean: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EwmaResponse {
    pub series: Vec<f64>,
    pub alpha: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Average(AverageResponse),
    Ewma(EwmaResponse),
}

/// Shape a computation result into its response body.
pub fn format(result: ComputationResult) -> ResponseBody {
    match result {
        ComputationResult::Average { mean, count } => {
            ResponseBody::Average(AverageResponse { mean, count })
        }
        ComputationResult::Ewma { series, alpha } => {
            let count = series.len();
            ResponseBody::Ewma(EwmaResponse {
                series,
                alpha,
                count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_body() {
        let result = ComputationResult::Average {
            mean: 5.0,
            count: 4,
        };
        assert_eq!(result.kind(), ComputationKind::Average);

        let body = format(result);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "mean": 5.0, "count": 4 })
        );
    }

    #[test]
    fn test_ewma_body_counts_series() {
        let result = ComputationResult::Ewma {
            series: vec![10.0, 15.0, 22.5],
            alpha: 0.5,
        };
        assert_eq!(result.kind(), ComputationKind::Ewma);

        match format(result) {
            ResponseBody::Ewma(body) => {
                assert_eq!(body.count, 3);
                assert_eq!(body.alpha, 0.5);
                assert_eq!(body.series, vec![10.0, 15.0, 22.5]);
            }
            other => panic!("expected ewma body, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ComputationKind::Ewma).unwrap(),
            "\"ewma\""
        );
    }
}
