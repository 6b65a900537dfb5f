pub mod average;
pub mod ewma;

pub use average::compute_average;
pub use ewma::{Ewma, compute_ewma};
