/// Reasons a raw series or smoothing factor is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    EmptySeries,
    NonFiniteValue { index: usize, value: f64 },
    MissingAlpha,
    NonFiniteAlpha(f64),
    AlphaOutOfRange(f64),
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySeries => write!(f, "series must contain at least one value"),
            Self::NonFiniteValue { index, value } => {
                write!(f, "value at index {} is not finite: {}", index, value)
            }
            Self::MissingAlpha => write!(f, "smoothing factor is required"),
            Self::NonFiniteAlpha(a) => write!(f, "smoothing factor is not a real number: {}", a),
            Self::AlphaOutOfRange(a) => {
                write!(f, "smoothing factor must satisfy 0 < alpha <= 1, got {}", a)
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
